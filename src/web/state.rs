//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::{SearchBackend, UpstreamClient};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Settings built at start-up
    pub settings: Arc<Settings>,
    /// Where searches are submitted and results fetched
    pub backend: Arc<dyn SearchBackend>,
}

impl AppState {
    /// Create state around an existing backend
    pub fn new(settings: Settings, backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            settings: Arc::new(settings),
            backend,
        }
    }

    /// Create state talking to the configured upstream API
    pub fn from_settings(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(client, &settings.upstream)?;
        Ok(Self::new(settings, Arc::new(upstream)))
    }
}
