//! The request façade consumed by UI code.
//!
//! An [`ApiClient`] owns everything one logical session needs: the candidate
//! registry, the connectivity verdict, the stored credential, the canned
//! offline tables, and one blocking HTTP client. Nothing here is process
//! global; independent clients never interfere.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::connectivity::{ConnectivityMode, ConnectivityState};
use crate::offline::OfflineDataset;
use crate::probe;
use crate::registry::EndpointRegistry;
use crate::session::SessionStore;

mod dispatch;
mod error;
mod services;
mod types;

pub use self::error::RequestError;
pub use self::types::*;

#[derive(Clone, Debug)]
pub struct ApiClientOptions {
    /// Per-candidate budget for the reachability scan.
    pub probe_timeout: Duration,
    /// Budget for each live request.
    pub request_timeout: Duration,
}

impl Default for ApiClientOptions {
    fn default() -> Self {
        Self {
            probe_timeout: probe::PROBE_TIMEOUT,
            request_timeout: Duration::from_secs(10),
        }
    }
}

pub struct ApiClient {
    registry: EndpointRegistry,
    connectivity: ConnectivityState,
    session: SessionStore,
    offline: OfflineDataset,
    http: reqwest::blocking::Client,
    // Single-flight guard: concurrent cold calls collapse into one scan.
    probe_guard: Mutex<()>,
    options: ApiClientOptions,
}

impl ApiClient {
    pub fn new(registry: EndpointRegistry) -> Result<Self> {
        Self::with_options(registry, ApiClientOptions::default())
    }

    pub fn with_options(registry: EndpointRegistry, options: ApiClientOptions) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("zapdir")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            registry,
            connectivity: ConnectivityState::new(),
            session: SessionStore::new(),
            offline: OfflineDataset::new(),
            http,
            probe_guard: Mutex::new(()),
            options,
        })
    }

    pub fn mode(&self) -> ConnectivityMode {
        self.connectivity.mode()
    }

    pub fn base_url(&self) -> Option<String> {
        self.connectivity.base_url()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Registers a typed callback fired on every connectivity transition.
    pub fn on_connectivity_change(
        &self,
        listener: impl Fn(ConnectivityMode) + Send + Sync + 'static,
    ) {
        self.connectivity.on_change(listener);
    }

    /// Forgets a sticky offline (or online) verdict; the next dispatch runs
    /// a fresh scan. This is the only way back once a session has demoted.
    pub fn force_reprobe(&self) {
        self.connectivity.reset();
    }

    pub(crate) fn lock_probe(&self) -> std::sync::MutexGuard<'_, ()> {
        self.probe_guard.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
