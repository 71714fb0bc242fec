//! Game catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use arcade_core::access::required_tier;
use arcade_core::distractors::has_duplicate_answers;
use arcade_core::games::{self, Availability};
use arcade_core::GameAccess;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/games
pub async fn list(State(state): State<AppState>) -> Json<GamesResponse> {
    let subscription = state.subscription.read().await;

    let games = GameType::ALL
        .into_iter()
        .map(|game| GameInfo {
            id: game,
            name: game.display_name().to_string(),
            description: game.description().to_string(),
            difficulty: game.difficulty(),
            required_tier: required_tier(game),
            allowed: subscription.can_play_game(game),
            card_limit: game.card_limit(),
            auto_advance_ms: game.auto_advance().map(|d| d.num_milliseconds()),
            reveal_delay_ms: game.reveal_delay().map(|d| d.num_milliseconds()),
            time_limit_secs: game.time_limit().map(|d| d.num_seconds()),
        })
        .collect();

    Json(GamesResponse {
        tier: subscription.tier,
        games,
    })
}

/// POST /api/games/{game}/availability
pub async fn availability(
    Path(game): Path<String>,
    Json(request): Json<CardsRequest>,
) -> Result<Json<AvailabilityResponse>> {
    let game: GameType = game.parse()?;
    let cards = into_cards(request.cards)?;
    let duplicate_answers = has_duplicate_answers(&cards);

    let response = match games::availability(game, &cards) {
        Availability::Ready(()) => AvailabilityResponse {
            game,
            available: true,
            duplicate_answers,
            reason: None,
            message: None,
        },
        Availability::Unavailable(reason) => AvailabilityResponse {
            game,
            available: false,
            duplicate_answers,
            message: Some(reason.message()),
            reason: Some(reason),
        },
    };

    Ok(Json(response))
}
