//! In-memory session credentials.
//!
//! The dispatcher attaches whatever bearer token is stored here; acquiring
//! and expiring tokens is the backend's business, not this crate's.

use std::sync::{Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<i64>,
    pub business_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, session: Session) {
        *self.lock() = Some(session);
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
