//! Player submissions and how each round judges them.

use super::Round;
use crate::error::{GameError, Result};
use crate::matching::compare_answers;
use crate::types::MatchingMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Hint Master points for an answer given without hints.
pub const HINT_MASTER_POINTS: u32 = 4;

/// What the player submitted for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Index into the round's options.
    Choice(usize),
    Verdict(bool),
    Text(String),
    Blanks(Vec<String>),
    Order(Vec<String>),
    /// Card ids picked as belonging to the category.
    Selection(Vec<String>),
    /// Two memory tiles turned over, by board index.
    Pair { first: usize, second: usize },
    Reviewed,
    /// Swipe: whether the player says they knew it.
    SelfGrade(bool),
    /// Move on without answering; the answer is revealed and counts as wrong.
    Skip,
}

impl Answer {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Choice(_) => "choice",
            Self::Verdict(_) => "verdict",
            Self::Text(_) => "text",
            Self::Blanks(_) => "blanks",
            Self::Order(_) => "order",
            Self::Selection(_) => "selection",
            Self::Pair { .. } => "pair",
            Self::Reviewed => "reviewed",
            Self::SelfGrade(_) => "self_grade",
            Self::Skip => "skip",
        }
    }
}

/// Result of judging one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub correct: bool,
    pub points: u32,
    pub possible: u32,
    /// Correct answer, for feedback.
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    /// Per-blank results for fill-in-the-blanks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blanks: Option<Vec<bool>>,
}

impl Outcome {
    fn judged(correct: bool, expected: impl Into<String>) -> Self {
        Self {
            correct,
            points: u32::from(correct),
            possible: 1,
            expected: expected.into(),
            similarity: None,
            blanks: None,
        }
    }
}

/// Judge `answer` against `round`.
///
/// Memory boards are judged tile by tile by the session, so they are
/// rejected here like any other mismatched answer.
pub fn evaluate(round: &Round, answer: &Answer, hints_used: u32) -> Result<Outcome> {
    let outcome = match (round, answer) {
        (Round::Flashcard { card }, Answer::Reviewed) => Outcome::judged(true, &card.answer),
        (Round::Swipe { card }, Answer::SelfGrade(knew)) => Outcome::judged(*knew, &card.answer),
        (Round::Choice { question }, Answer::Choice(index)) => {
            if *index >= question.options.len() {
                return Err(GameError::OptionOutOfRange {
                    index: *index,
                    len: question.options.len(),
                });
            }
            Outcome::judged(
                *index == question.correct_answer,
                question.correct_option(),
            )
        }
        (Round::Choice { question }, Answer::Skip) => {
            Outcome::judged(false, question.correct_option())
        }
        (Round::TrueFalse { is_true, .. }, Answer::Verdict(verdict)) => {
            Outcome::judged(verdict == is_true, if *is_true { "True" } else { "False" })
        }
        (Round::TrueFalse { is_true, .. }, Answer::Skip) => {
            Outcome::judged(false, if *is_true { "True" } else { "False" })
        }
        (Round::Scramble { answer, .. }, Answer::Text(typed)) => {
            let result = compare_answers(typed, answer, MatchingMode::CaseInsensitive);
            Outcome::judged(result.is_correct, answer)
        }
        (Round::TypeAnswer { answer, .. }, Answer::Text(typed)) => {
            let result = compare_answers(typed, answer, MatchingMode::Fuzzy);
            Outcome {
                similarity: Some(result.similarity),
                ..Outcome::judged(result.is_correct, answer)
            }
        }
        (Round::FillBlanks { blanked, answer, .. }, Answer::Blanks(fills)) => {
            if fills.len() != blanked.blanks.len() {
                return Err(GameError::BlankCountMismatch {
                    expected: blanked.blanks.len(),
                    got: fills.len(),
                });
            }
            let results = blanked.check(fills);
            Outcome {
                blanks: Some(results.clone()),
                ..Outcome::judged(results.iter().all(|ok| *ok), answer)
            }
        }
        (Round::Sequence { answer_words, .. }, Answer::Order(words)) => {
            Outcome::judged(words == answer_words, answer_words.join(" "))
        }
        (
            Round::CategorySort {
                category,
                correct_ids,
                ..
            },
            Answer::Selection(ids),
        ) => {
            let picked: BTreeSet<&String> = ids.iter().collect();
            let wanted: BTreeSet<&String> = correct_ids.iter().collect();
            Outcome::judged(picked == wanted, category)
        }
        (Round::HintLadder { answer, .. }, Answer::Text(typed)) => {
            let result = compare_answers(typed, answer, MatchingMode::CaseInsensitive);
            let points = if result.is_correct {
                HINT_MASTER_POINTS.saturating_sub(hints_used).max(1)
            } else {
                0
            };
            Outcome {
                points,
                possible: HINT_MASTER_POINTS,
                ..Outcome::judged(result.is_correct, answer)
            }
        }
        _ => {
            return Err(GameError::AnswerMismatch {
                answer: answer.kind(),
                round: round.kind(),
            })
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{sample_deck, QuizQuestion};
    use crate::words::BlankedAnswer;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn hint_round() -> Round {
        Round::HintLadder {
            card_id: "1".to_string(),
            question: "What is the capital of France?".to_string(),
            answer: "Paris".to_string(),
            hints: crate::words::hint_ladder("Paris"),
        }
    }

    #[test]
    fn choice_checks_index() {
        let round = Round::Choice {
            question: QuizQuestion {
                id: "1".to_string(),
                question: "Capital of France?".to_string(),
                options: strings(&["Rome", "Paris", "Oslo"]),
                correct_answer: 1,
                explanation: None,
            },
        };
        let right = evaluate(&round, &Answer::Choice(1), 0).unwrap();
        assert!(right.correct);
        assert_eq!(right.expected, "Paris");
        assert!(!evaluate(&round, &Answer::Choice(0), 0).unwrap().correct);
        assert_eq!(
            evaluate(&round, &Answer::Choice(3), 0),
            Err(GameError::OptionOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn type_answer_is_fuzzy() {
        let round = Round::TypeAnswer {
            card_id: "4".to_string(),
            question: "Largest planet?".to_string(),
            answer: "Jupiter".to_string(),
            hint: "j_____r".to_string(),
        };
        let close = evaluate(&round, &text("Jupitar"), 0).unwrap();
        assert!(close.correct);
        assert!(close.similarity.is_some_and(|s| s >= 0.8 && s < 1.0));
        assert!(!evaluate(&round, &text("Mars"), 0).unwrap().correct);
    }

    #[test]
    fn scramble_is_case_insensitive_but_not_fuzzy() {
        let round = Round::Scramble {
            card_id: "4".to_string(),
            question: "Largest planet?".to_string(),
            scrambled: "rujetpi".to_string(),
            answer: "Jupiter".to_string(),
        };
        assert!(evaluate(&round, &text(" jupiter "), 0).unwrap().correct);
        assert!(!evaluate(&round, &text("jupitar"), 0).unwrap().correct);
    }

    #[test]
    fn fill_blanks_needs_every_blank() {
        let round = Round::FillBlanks {
            card_id: "1".to_string(),
            question: "Who wrote Hamlet?".to_string(),
            blanked: BlankedAnswer {
                text: "___________ ___________".to_string(),
                blanks: strings(&["William", "Shakespeare"]),
            },
            answer: "William Shakespeare".to_string(),
        };
        let partial = evaluate(&round, &Answer::Blanks(strings(&["william", "Marlowe"])), 0).unwrap();
        assert!(!partial.correct);
        assert_eq!(partial.blanks, Some(vec![true, false]));

        let full = evaluate(&round, &Answer::Blanks(strings(&["WILLIAM", "shakespeare"])), 0).unwrap();
        assert!(full.correct);

        assert_eq!(
            evaluate(&round, &Answer::Blanks(strings(&["William"])), 0),
            Err(GameError::BlankCountMismatch { expected: 2, got: 1 })
        );
    }

    #[test]
    fn sequence_needs_exact_order() {
        let round = Round::Sequence {
            card_id: "1".to_string(),
            question: "Q".to_string(),
            words: strings(&["fox", "the", "quick"]),
            answer_words: strings(&["the", "quick", "fox"]),
        };
        assert!(evaluate(&round, &Answer::Order(strings(&["the", "quick", "fox"])), 0)
            .unwrap()
            .correct);
        assert!(!evaluate(&round, &Answer::Order(strings(&["quick", "the", "fox"])), 0)
            .unwrap()
            .correct);
    }

    #[test]
    fn category_sort_ignores_selection_order() {
        let round = Round::CategorySort {
            category: "Science".to_string(),
            cards: sample_deck(),
            correct_ids: strings(&["4", "7"]),
        };
        assert!(evaluate(&round, &Answer::Selection(strings(&["7", "4"])), 0)
            .unwrap()
            .correct);
        assert!(!evaluate(&round, &Answer::Selection(strings(&["4"])), 0)
            .unwrap()
            .correct);
        assert!(!evaluate(&round, &Answer::Selection(strings(&["4", "7", "1"])), 0)
            .unwrap()
            .correct);
    }

    #[test]
    fn hint_master_points_shrink_with_hints() {
        let round = hint_round();
        let points = |hints| evaluate(&round, &text("paris"), hints).unwrap().points;
        assert_eq!(points(0), 4);
        assert_eq!(points(1), 3);
        assert_eq!(points(2), 2);
        assert_eq!(points(3), 1);

        let wrong = evaluate(&round, &text("Lyon"), 0).unwrap();
        assert_eq!((wrong.points, wrong.possible), (0, 4));
    }

    #[test]
    fn flashcard_and_swipe() {
        let card = sample_deck().remove(0);
        let review = Round::Flashcard { card: card.clone() };
        assert!(evaluate(&review, &Answer::Reviewed, 0).unwrap().correct);

        let swipe = Round::Swipe { card };
        assert!(evaluate(&swipe, &Answer::SelfGrade(true), 0).unwrap().correct);
        assert!(!evaluate(&swipe, &Answer::SelfGrade(false), 0).unwrap().correct);
    }

    #[test]
    fn skip_reveals_and_scores_nothing() {
        let round = Round::TrueFalse {
            card_id: "1".to_string(),
            statement: "Capital of France? Paris".to_string(),
            is_true: true,
            explanation: "The correct answer is \"Paris\"".to_string(),
        };
        let skipped = evaluate(&round, &Answer::Skip, 0).unwrap();
        assert!(!skipped.correct);
        assert_eq!((skipped.points, skipped.possible), (0, 1));
        assert_eq!(skipped.expected, "True");

        assert_eq!(
            evaluate(&hint_round(), &Answer::Skip, 0),
            Err(GameError::AnswerMismatch {
                answer: "skip",
                round: "hint_ladder"
            })
        );
    }

    #[test]
    fn wrong_answer_shape_is_rejected() {
        assert_eq!(
            evaluate(&hint_round(), &Answer::Choice(0), 0),
            Err(GameError::AnswerMismatch {
                answer: "choice",
                round: "hint_ladder"
            })
        );
    }

    #[test]
    fn answer_wire_format() {
        let json = serde_json::to_value(Answer::Choice(2)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "choice", "value": 2}));

        let pair: Answer =
            serde_json::from_str(r#"{"kind":"pair","value":{"first":0,"second":3}}"#).unwrap();
        assert_eq!(pair, Answer::Pair { first: 0, second: 3 });

        let reviewed: Answer = serde_json::from_str(r#"{"kind":"reviewed"}"#).unwrap();
        assert_eq!(reviewed, Answer::Reviewed);

        let skip: Answer = serde_json::from_str(r#"{"kind":"skip"}"#).unwrap();
        assert_eq!(skip, Answer::Skip);
    }
}
