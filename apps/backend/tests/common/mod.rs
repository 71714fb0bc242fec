//! Common test utilities and fixtures for integration tests.
//!
//! Everything runs in memory: each [`TestContext`] owns a fresh session
//! store and a clock the test can move forward by hand.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};

use arcade_core::Tier;
use study_arcade_backend::services::sessions::SessionStore;
use study_arcade_backend::{app, AppState};

/// Test context with its own state and virtual clock.
pub struct TestContext {
    pub state: AppState,
    now: Arc<Mutex<DateTime<Utc>>>,
    app: Router,
}

impl TestContext {
    /// Context on the pro plan.
    pub fn new() -> Self {
        Self::with_tier(Tier::Pro)
    }

    pub fn with_tier(tier: Tier) -> Self {
        let now = Arc::new(Mutex::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        ));
        let handle = now.clone();
        let store = SessionStore::with_clock(Arc::new(move || *handle.lock().unwrap()));

        let state = AppState::with_store(tier, store);
        let app = app(state.clone());

        Self { state, now, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Move the virtual clock forward.
    pub fn advance_clock(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}
