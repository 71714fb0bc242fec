//! Error types for arcade-core.

use thiserror::Error;

use crate::session::Phase;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by misuse of a game session.
///
/// Running out of cards is not an error; see [`crate::games::Availability`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {action} while session is {phase:?}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("answer of kind {answer} does not fit a {round} round")]
    AnswerMismatch {
        answer: &'static str,
        round: &'static str,
    },

    #[error("option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("expected {expected} blanks, got {got}")]
    BlankCountMismatch { expected: usize, got: usize },

    #[error("tile {index} cannot be flipped")]
    InvalidTile { index: usize },

    #[error("no hints available for {game}")]
    NoHints { game: &'static str },

    #[error("{game} questions cannot be skipped")]
    NoSkip { game: &'static str },

    #[error("unknown game type: {0}")]
    UnknownGame(String),
}

/// Errors raised when constructing a study card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("question must not be empty")]
    EmptyQuestion,

    #[error("answer must not be empty")]
    EmptyAnswer,
}
