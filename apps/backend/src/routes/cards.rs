//! Card endpoints

use axum::{extract::State, http::StatusCode, Json};

use arcade_core::{sample_deck, GameAccess};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/cards/sample
pub async fn sample() -> Json<CardsResponse> {
    Json(CardsResponse {
        cards: sample_deck(),
    })
}

/// POST /api/cards
///
/// Validates a new card against the plan's card allowance and counts it.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CardInput>,
) -> Result<(StatusCode, Json<StudyCard>)> {
    let mut subscription = state.subscription.write().await;
    if !subscription.can_create_card() {
        return Err(ApiError::Forbidden(format!(
            "the {} plan cannot create more cards",
            subscription.tier.as_str()
        )));
    }

    let position = subscription.cards_created as usize;
    let card = input.into_card(position)?;
    subscription.record_card_created();
    tracing::info!(card_id = %card.id, "card created");

    Ok((StatusCode::CREATED, Json(card)))
}
