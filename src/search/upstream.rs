//! Upstream search API access

use super::error::UpstreamError;
use super::models::{entry_count, extract_job_uuid, SearchPayload};
use crate::config::UpstreamSettings;
use crate::network::HttpClient;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use secrecy::Secret;
use serde_json::{value::RawValue, Value};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

/// Backend that runs searches as asynchronous jobs
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Submit a search job, returning its identifier
    async fn submit(&self, payload: &SearchPayload) -> Result<String, UpstreamError>;

    /// Fetch whatever the backend currently holds for a job, as sent
    async fn result(&self, job_uuid: &str) -> Result<Box<RawValue>, UpstreamError>;
}

/// Client for the Gopher live-search API
pub struct UpstreamClient {
    http: HttpClient,
    search_url: Url,
    token: Secret<String>,
    search_timeout: Duration,
    result_timeout: Duration,
}

impl UpstreamClient {
    /// Create a client from upstream settings
    pub fn new(http: HttpClient, settings: &UpstreamSettings) -> Result<Self> {
        let search_url = Url::parse(&settings.url)?;
        if search_url.cannot_be_a_base() {
            return Err(anyhow!("upstream url cannot be a base: {}", settings.url));
        }

        Ok(Self {
            http,
            search_url,
            token: settings.auth_token.clone(),
            search_timeout: settings.search_timeout(),
            result_timeout: settings.result_timeout(),
        })
    }

    /// Lookup endpoint for a job: `{search_url}/result/{job_uuid}`
    pub fn result_url(&self, job_uuid: &str) -> Url {
        let mut url = self.search_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("result").push(job_uuid);
        }
        url
    }
}

#[async_trait]
impl SearchBackend for UpstreamClient {
    async fn submit(&self, payload: &SearchPayload) -> Result<String, UpstreamError> {
        info!(
            "Sending search: {}, max_results: {}",
            payload.query(),
            payload.max_results()
        );

        let response: Value = self
            .http
            .post_json(
                self.search_url.clone(),
                &self.token,
                payload,
                self.search_timeout,
            )
            .await
            .map_err(|e| {
                error!("Search error: {}", e);
                e
            })?;
        debug!("Search response: {}", response);

        extract_job_uuid(&response).map_err(|e| {
            error!("Search error: {}", e);
            e
        })
    }

    async fn result(&self, job_uuid: &str) -> Result<Box<RawValue>, UpstreamError> {
        let response: Box<RawValue> = self
            .http
            .get_json(self.result_url(job_uuid), &self.token, self.result_timeout)
            .await
            .map_err(|e| {
                error!("Result error for job {}: {}", job_uuid, e);
                e
            })?;
        debug!("Result response for job {}: {} entries", job_uuid, entry_count(&response));

        Ok(response)
    }
}
