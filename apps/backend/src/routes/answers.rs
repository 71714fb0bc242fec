//! Stateless answer checking

use axum::Json;

use arcade_core::compare_answers;

use crate::models::*;

/// POST /api/answers/check
pub async fn check(Json(request): Json<CheckAnswerRequest>) -> Json<CheckAnswerResponse> {
    Json(compare_answers(
        &request.typed,
        &request.correct,
        request.mode,
    ))
}
