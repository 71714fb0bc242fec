pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use arcade_core::{Subscription, Tier};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub subscription: Arc<RwLock<Subscription>>,
}

impl AppState {
    pub fn new(tier: Tier) -> Self {
        Self::with_store(tier, SessionStore::default())
    }

    pub fn with_store(tier: Tier, sessions: SessionStore) -> Self {
        Self {
            sessions: Arc::new(sessions),
            subscription: Arc::new(RwLock::new(Subscription::new(tier))),
        }
    }
}

/// Build the full router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/games", get(routes::games::list))
        .route(
            "/api/games/{game}/availability",
            post(routes::games::availability),
        )
        .route("/api/sessions", post(routes::sessions::create))
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get).delete(routes::sessions::delete),
        )
        .route("/api/sessions/{id}/answer", post(routes::sessions::answer))
        .route("/api/sessions/{id}/hint", post(routes::sessions::hint))
        .route("/api/sessions/{id}/next", post(routes::sessions::next))
        .route("/api/answers/check", post(routes::answers::check))
        .route("/api/cards", post(routes::cards::create))
        .route("/api/cards/sample", get(routes::cards::sample))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(tier = config.tier.as_str(), "Gating games by plan");

    let app = app(AppState::new(config.tier));
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
