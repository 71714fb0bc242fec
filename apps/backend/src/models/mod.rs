//! API request and response types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from arcade-core
pub use arcade_core::types::Difficulty;
pub use arcade_core::{
    Answer, GameType, MatchResult, MatchingMode, Outcome, ScoreReport, SessionSnapshot, StudyCard,
    Tier, Unavailable,
};

use crate::error::ApiError;

// === Cards ===

/// A card as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInput {
    /// Generated from the card's position when missing.
    #[serde(default)]
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl CardInput {
    pub fn into_card(self, position: usize) -> Result<StudyCard, ApiError> {
        let id = self.id.unwrap_or_else(|| (position + 1).to_string());
        Ok(StudyCard::new(
            id,
            &self.question,
            &self.answer,
            self.category.as_deref(),
        )?)
    }
}

/// Validate a client deck, reporting the first bad card by position.
///
/// Card ids must be unique: memory tiles pair up and distractors are
/// excluded by id.
pub fn into_cards(inputs: Vec<CardInput>) -> Result<Vec<StudyCard>, ApiError> {
    let mut seen = HashSet::new();
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            let card = input.into_card(i).map_err(|err| match err {
                ApiError::BadRequest(msg) => ApiError::BadRequest(format!("card {}: {msg}", i + 1)),
                other => other,
            })?;
            if !seen.insert(card.id.clone()) {
                return Err(ApiError::BadRequest(format!(
                    "card {}: duplicate id {}",
                    i + 1,
                    card.id
                )));
            }
            Ok(card)
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsRequest {
    pub cards: Vec<CardInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<StudyCard>,
}

// === Games ===

/// Catalog entry for one game mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: GameType,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub required_tier: Tier,
    /// Whether the server's plan allows this game right now.
    pub allowed: bool,
    pub card_limit: Option<usize>,
    pub auto_advance_ms: Option<i64>,
    /// Delay before moving on after a skipped question reveals its answer.
    pub reveal_delay_ms: Option<i64>,
    pub time_limit_secs: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesResponse {
    pub tier: Tier,
    pub games: Vec<GameInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub game: GameType,
    pub available: bool,
    /// Some cards share an answer, so they can never be told apart as options.
    pub duplicate_answers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Unavailable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// === Sessions ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub game: GameType,
    pub cards: Vec<CardInput>,
    /// Only play cards from this category.
    #[serde(default)]
    pub category: Option<String>,
    /// Fixed seed for reproducible rounds.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub session: SessionSnapshot,
    /// Present once the session has completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ScoreReport>,
}

impl SessionResponse {
    pub fn new(id: Uuid, session: SessionSnapshot) -> Self {
        let report = session.score.map(|score| score.report());
        Self {
            id,
            session,
            report,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub outcome: Outcome,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: String,
    pub session: SessionResponse,
}

// === Answer checking ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub typed: String,
    pub correct: String,
    #[serde(default)]
    pub mode: MatchingMode,
}

pub type CheckAnswerResponse = MatchResult;
