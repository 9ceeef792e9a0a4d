//! Session-wide connectivity tracking.
//!
//! The state is owned by the [`crate::api::ApiClient`] that created it, not a
//! process-wide global, so independent clients (and tests) cannot interfere
//! with each other. Reads and writes go through one mutex-guarded snapshot:
//! probing and request dispatch can race on separate threads.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectivityMode {
    /// No probe has run yet (or a re-probe was forced).
    Unknown,
    /// A backend answered; `base_url` holds the selected candidate.
    Online,
    /// Every candidate was exhausted, or a live call failed. Sticky until
    /// [`ConnectivityState::reset`].
    Offline,
}

impl ConnectivityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityMode::Unknown => "unknown",
            ConnectivityMode::Online => "online",
            ConnectivityMode::Offline => "offline",
        }
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    mode: ConnectivityMode,
    base_url: Option<String>,
}

type ModeListener = Box<dyn Fn(ConnectivityMode) + Send + Sync>;

pub struct ConnectivityState {
    inner: Mutex<Snapshot>,
    listener: Mutex<Option<ModeListener>>,
}

impl ConnectivityState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Snapshot {
                mode: ConnectivityMode::Unknown,
                base_url: None,
            }),
            listener: Mutex::new(None),
        }
    }

    pub fn mode(&self) -> ConnectivityMode {
        self.lock().mode
    }

    pub fn base_url(&self) -> Option<String> {
        self.lock().base_url.clone()
    }

    /// Records a reachable backend. `base_url` must be non-empty: Online mode
    /// always carries the selected candidate.
    pub fn mark_online(&self, base_url: &str) {
        assert!(!base_url.is_empty(), "mark_online requires a base url");
        let changed = {
            let mut inner = self.lock();
            let changed = inner.mode != ConnectivityMode::Online;
            inner.mode = ConnectivityMode::Online;
            inner.base_url = Some(base_url.to_string());
            changed
        };
        if changed {
            debug!(base_url, "connectivity online");
            self.notify(ConnectivityMode::Online);
        }
    }

    /// Drops to offline mode and clears the selected backend.
    pub fn mark_offline(&self) {
        let changed = {
            let mut inner = self.lock();
            let changed = inner.mode != ConnectivityMode::Offline;
            inner.mode = ConnectivityMode::Offline;
            inner.base_url = None;
            changed
        };
        if changed {
            debug!("connectivity offline");
            self.notify(ConnectivityMode::Offline);
        }
    }

    /// Forgets the current verdict so the next dispatch probes again.
    pub fn reset(&self) {
        let changed = {
            let mut inner = self.lock();
            let changed = inner.mode != ConnectivityMode::Unknown;
            inner.mode = ConnectivityMode::Unknown;
            inner.base_url = None;
            changed
        };
        if changed {
            self.notify(ConnectivityMode::Unknown);
        }
    }

    /// Registers a callback invoked on every mode transition. Replaces any
    /// previously registered callback. The callback runs outside the state
    /// lock, on the thread that caused the transition.
    pub fn on_change(&self, listener: impl Fn(ConnectivityMode) + Send + Sync + 'static) {
        *self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Box::new(listener));
    }

    fn notify(&self, mode: ConnectivityMode) {
        let listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(listener) = listener.as_ref() {
            listener(mode);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Snapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ConnectivityState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/connectivity_tests.rs"]
mod tests;
