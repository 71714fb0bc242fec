//! Game session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use arcade_core::types::pool_for_category;
use arcade_core::{game_rng, plan_rounds, Availability, GameAccess, Session};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn ensure_can_play(access: &dyn GameAccess, game: GameType) -> Result<()> {
    if access.can_play_game(game) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "{} is not available on the current plan",
            game.display_name()
        )))
    }
}

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let game = request.game;
    let cards = into_cards(request.cards)?;
    let pool: Vec<StudyCard> = pool_for_category(&cards, request.category.as_deref())
        .into_iter()
        .cloned()
        .collect();

    let mut subscription = state.subscription.write().await;
    ensure_can_play(&*subscription, game)?;

    let mut rng = game_rng(request.seed);
    let rounds = match plan_rounds(game, &pool, &mut rng) {
        Availability::Ready(rounds) => rounds,
        Availability::Unavailable(reason) => return Err(ApiError::Unavailable(reason)),
    };

    let mut session = Session::new(game, rounds);
    session.start(state.sessions.now())?;
    subscription.record_game_played();
    drop(subscription);

    let snapshot = session.snapshot();
    let id = state.sessions.insert(session).await;
    tracing::info!(session_id = %id, game = %game, cards = pool.len(), "session started");

    Ok((StatusCode::CREATED, Json(SessionResponse::new(id, snapshot))))
}

/// GET /api/sessions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(SessionResponse::new(id, snapshot)))
}

/// POST /api/sessions/{id}/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(answer): Json<Answer>,
) -> Result<Json<AnswerResponse>> {
    let (outcome, snapshot) = state
        .sessions
        .with_session(id, |session, now| session.submit(&answer, now))
        .await?;

    if let Some(score) = snapshot.score {
        tracing::info!(session_id = %id, correct = score.correct, total = score.total, "session completed");
    }

    Ok(Json(AnswerResponse {
        outcome,
        session: SessionResponse::new(id, snapshot),
    }))
}

/// POST /api/sessions/{id}/hint
pub async fn hint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HintResponse>> {
    let (hint, snapshot) = state
        .sessions
        .with_session(id, |session, _| session.reveal_hint())
        .await?;

    Ok(Json(HintResponse {
        hint,
        session: SessionResponse::new(id, snapshot),
    }))
}

/// POST /api/sessions/{id}/next
pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    let ((), snapshot) = state
        .sessions
        .with_session(id, |session, now| session.advance(now))
        .await?;

    Ok(Json(SessionResponse::new(id, snapshot)))
}

/// DELETE /api/sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.sessions.remove(id).await?;
    tracing::info!(session_id = %id, "session removed");
    Ok(StatusCode::NO_CONTENT)
}
