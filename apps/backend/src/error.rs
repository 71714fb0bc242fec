//! Error handling for the backend API

use arcade_core::{CardError, GameError, Unavailable};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{}", .0.message())]
    Unavailable(Unavailable),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidTransition { .. }
            | GameError::NoHints { .. }
            | GameError::NoSkip { .. } => {
                ApiError::Conflict(err.to_string())
            }
            GameError::UnknownGame(_) => ApiError::NotFound(err.to_string()),
            GameError::AnswerMismatch { .. }
            | GameError::OptionOutOfRange { .. }
            | GameError::BlankCountMismatch { .. }
            | GameError::InvalidTile { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<Unavailable>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Unavailable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unavailable"),
        };

        let reason = match &self {
            ApiError::Unavailable(reason) => Some(reason.clone()),
            _ => None,
        };
        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            reason,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
