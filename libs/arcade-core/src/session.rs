//! Round and score tracking for one play-through.
//!
//! A [`Session`] walks `NotStarted -> InProgress -> Answered -> InProgress`
//! until the last round, then `Completed`. The session never reads the
//! clock: every time-dependent call takes `now`, and auto-advance is an
//! explicit [`ScheduledAdvance`] that fires from [`Session::poll`].

use crate::error::{GameError, Result};
use crate::games::memory::MemoryProgress;
use crate::games::{evaluate, Answer, Outcome, Round};
use crate::types::{GameScore, GameType};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress,
    Answered,
    Completed,
}

/// A delayed move to the next round, cancelled by any explicit advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAdvance {
    pub id: u64,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: GameType,
    rounds: Vec<Round>,
    index: usize,
    phase: Phase,
    correct: u32,
    total: u32,
    started_at: Option<DateTime<Utc>>,
    pending: Option<ScheduledAdvance>,
    next_schedule_id: u64,
    hints_used: u32,
    last_outcome: Option<Outcome>,
    memory: Option<MemoryProgress>,
    score: Option<GameScore>,
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub game: GameType,
    pub phase: Phase,
    pub round_index: usize,
    pub round_count: usize,
    pub round: Option<Round>,
    pub correct: u32,
    pub total: u32,
    pub hints: Vec<String>,
    pub last_outcome: Option<Outcome>,
    pub pending: Option<ScheduledAdvance>,
    pub memory: Option<MemoryProgress>,
    pub score: Option<GameScore>,
}

impl Session {
    pub fn new(game: GameType, rounds: Vec<Round>) -> Self {
        let memory = match rounds.first() {
            Some(Round::Memory { tiles }) => Some(MemoryProgress::new(tiles)),
            _ => None,
        };
        let total = memory.as_ref().map_or(0, MemoryProgress::pairs);

        Self {
            game,
            rounds,
            index: 0,
            phase: Phase::NotStarted,
            correct: 0,
            total,
            started_at: None,
            pending: None,
            next_schedule_id: 0,
            hints_used: 0,
            last_outcome: None,
            memory,
            score: None,
        }
    }

    pub fn game(&self) -> GameType {
        self.game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn round_index(&self) -> usize {
        self.index
    }

    pub fn pending(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    pub fn memory(&self) -> Option<&MemoryProgress> {
        self.memory.as_ref()
    }

    /// Final score, once the session has completed.
    pub fn score(&self) -> Option<GameScore> {
        self.score
    }

    pub fn current_round(&self) -> Option<&Round> {
        match self.phase {
            Phase::InProgress | Phase::Answered => self.rounds.get(self.index),
            Phase::NotStarted | Phase::Completed => None,
        }
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.expect_phase("start", &[Phase::NotStarted])?;
        self.started_at = Some(now);
        self.phase = Phase::InProgress;
        if self.rounds.is_empty() {
            self.complete(now);
        }
        Ok(())
    }

    /// Judge an answer for the current round.
    ///
    /// A skip reveals the answer, counts the round as wrong and moves on
    /// after the game's reveal delay.
    pub fn submit(&mut self, answer: &Answer, now: DateTime<Utc>) -> Result<Outcome> {
        self.expire(now);
        self.expect_phase("submit", &[Phase::InProgress])?;

        if self.memory.is_some() {
            return self.flip(answer, now);
        }

        let delay = match answer {
            Answer::Skip => Some(self.game.reveal_delay().ok_or(GameError::NoSkip {
                game: self.game.as_str(),
            })?),
            _ => self.game.auto_advance(),
        };
        let round = &self.rounds[self.index];
        let outcome = evaluate(round, answer, self.hints_used)?;
        self.correct += outcome.points;
        self.total += outcome.possible;
        self.last_outcome = Some(outcome.clone());
        self.phase = Phase::Answered;
        if let Some(delay) = delay {
            self.schedule(now + delay);
        }

        Ok(outcome)
    }

    fn flip(&mut self, answer: &Answer, now: DateTime<Utc>) -> Result<Outcome> {
        let (Some(progress), Some(Round::Memory { tiles })) =
            (self.memory.as_mut(), self.rounds.get(self.index))
        else {
            return Err(GameError::AnswerMismatch {
                answer: answer.kind(),
                round: "memory",
            });
        };
        let Answer::Pair { first, second } = *answer else {
            return Err(GameError::AnswerMismatch {
                answer: answer.kind(),
                round: "memory",
            });
        };

        let is_pair = progress.flip(tiles, first, second)?;
        let expected = tiles
            .iter()
            .enumerate()
            .find(|(i, t)| *i != first && t.match_id == tiles[first].match_id)
            .map(|(_, t)| t.content.clone())
            .unwrap_or_default();
        let cleared = progress.is_cleared();

        let outcome = Outcome {
            correct: is_pair,
            points: u32::from(is_pair),
            possible: 1,
            expected,
            similarity: None,
            blanks: None,
        };
        self.correct += outcome.points;
        self.last_outcome = Some(outcome.clone());

        if cleared {
            self.complete(now);
        } else if !is_pair {
            self.phase = Phase::Answered;
            if let Some(delay) = self.game.auto_advance() {
                self.schedule(now + delay);
            }
        }

        Ok(outcome)
    }

    /// Move on after an answer, cancelling any scheduled advance.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.expire(now);
        self.expect_phase("advance", &[Phase::Answered])?;
        self.cancel_pending();
        self.step(now);
        Ok(())
    }

    /// Fire a due scheduled advance and enforce the time limit.
    ///
    /// Returns whether the session changed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if self.expire(now) {
            return true;
        }
        match self.pending {
            Some(scheduled) if scheduled.due_at <= now && self.phase == Phase::Answered => {
                self.pending = None;
                self.step(now);
                true
            }
            _ => false,
        }
    }

    /// Drop the scheduled advance, if any.
    pub fn cancel_pending(&mut self) -> Option<ScheduledAdvance> {
        self.pending.take()
    }

    /// Reveal the next hint for the current round.
    ///
    /// Hint Master hints cost points and run out after the third; the
    /// type-answer hint is free and can be asked for again.
    pub fn reveal_hint(&mut self) -> Result<String> {
        self.expect_phase("reveal a hint", &[Phase::InProgress])?;
        let no_hints = GameError::NoHints {
            game: self.game.as_str(),
        };
        match self.rounds.get(self.index) {
            Some(Round::HintLadder { hints, .. }) => {
                let hint = hints.get(self.hints_used as usize).cloned().ok_or(no_hints)?;
                self.hints_used += 1;
                Ok(hint)
            }
            Some(Round::TypeAnswer { hint, .. }) => Ok(hint.clone()),
            _ => Err(no_hints),
        }
    }

    /// Hints revealed so far for the current round.
    pub fn revealed_hints(&self) -> &[String] {
        match self.current_round() {
            Some(Round::HintLadder { hints, .. }) => {
                &hints[..hints.len().min(self.hints_used as usize)]
            }
            _ => &[],
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.game,
            phase: self.phase,
            round_index: self.index,
            round_count: self.rounds.len(),
            round: self.current_round().cloned(),
            correct: self.correct,
            total: self.total,
            hints: self.revealed_hints().to_vec(),
            last_outcome: self.last_outcome.clone(),
            pending: self.pending,
            memory: self.memory.clone(),
            score: self.score,
        }
    }

    fn expect_phase(&self, action: &'static str, allowed: &[Phase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    fn schedule(&mut self, due_at: DateTime<Utc>) {
        self.next_schedule_id += 1;
        self.pending = Some(ScheduledAdvance {
            id: self.next_schedule_id,
            due_at,
        });
    }

    fn step(&mut self, now: DateTime<Utc>) {
        if self.memory.is_some() {
            // Turn the mismatched tiles back over.
            self.phase = Phase::InProgress;
            return;
        }

        self.index += 1;
        self.hints_used = 0;
        self.last_outcome = None;
        if self.index >= self.rounds.len() {
            self.complete(now);
        } else {
            self.phase = Phase::InProgress;
        }
    }

    fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let (Some(limit), Some(started)) = (self.game.time_limit(), self.started_at) else {
            return false;
        };
        let running = matches!(self.phase, Phase::InProgress | Phase::Answered);
        if running && now - started >= limit {
            tracing::debug!(game = %self.game, "time limit reached");
            self.complete(now);
            return true;
        }
        false
    }

    fn complete(&mut self, now: DateTime<Utc>) {
        let elapsed = self
            .started_at
            .map_or(Duration::zero(), |started| now - started);
        let elapsed = match self.game.time_limit() {
            Some(limit) => elapsed.min(limit),
            None => elapsed,
        };

        let score = GameScore {
            correct: self.correct,
            total: self.total,
            time_spent: elapsed.num_seconds().max(0) as u32,
        };
        self.phase = Phase::Completed;
        self.pending = None;
        self.score = Some(score);
        tracing::debug!(
            game = %self.game,
            correct = score.correct,
            total = score.total,
            time_spent = score.time_spent,
            "session completed"
        );
    }
}
