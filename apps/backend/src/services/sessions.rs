//! In-memory session hosting.
//!
//! Every access first polls the session with the store's clock, so a
//! scheduled auto-advance or an expired time limit is applied before the
//! caller sees or changes the session. A completed session is dropped
//! once its final view has been handed back.

use std::collections::HashMap;
use std::sync::Arc;

use arcade_core::{GameError, Phase, Session, SessionSnapshot};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    clock: Clock,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }
}

impl SessionStore {
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub async fn insert(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        id
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Poll and return the current view of a session.
    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot> {
        self.with_session(id, |session, _| Ok(session.snapshot()))
            .await
            .map(|(_, snapshot)| snapshot)
    }

    /// Run `f` against a polled session.
    ///
    /// Returns `f`'s value together with the session view after `f` ran.
    /// If that view is completed the session is removed from the store.
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session, DateTime<Utc>) -> std::result::Result<T, GameError>,
    ) -> Result<(T, SessionSnapshot)> {
        let now = self.now();
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("session {id}")))?;

        if session.poll(now) {
            tracing::debug!(session_id = %id, phase = ?session.phase(), "scheduled transition applied");
        }
        let value = f(session, now)?;
        let snapshot = session.snapshot();

        if snapshot.phase == Phase::Completed {
            sessions.remove(&id);
            tracing::debug!(session_id = %id, "completed session discarded");
        }
        Ok((value, snapshot))
    }

    /// Tear down a session, cancelling any scheduled advance.
    pub async fn remove(&self, id: Uuid) -> Result<SessionSnapshot> {
        let mut session = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| ApiError::NotFound(format!("session {id}")))?;

        if let Some(pending) = session.cancel_pending() {
            tracing::debug!(session_id = %id, schedule_id = pending.id, "cancelled scheduled advance");
        }
        Ok(session.snapshot())
    }
}
