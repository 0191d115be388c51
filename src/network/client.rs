//! HTTP client for calls to the upstream search API

use crate::search::UpstreamError;
use anyhow::Result;
use reqwest::{header, Client, RequestBuilder};
use secrecy::{ExposeSecret, Secret};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

/// Idle connections kept per upstream host
const POOL_MAX_IDLE_PER_HOST: usize = 20;

/// HTTP client wrapper speaking bearer-authenticated JSON
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client; timeouts are set per call
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("samudra-proxy/{}", crate::VERSION),
        })
    }

    /// GET a JSON document
    pub async fn get_json<R>(
        &self,
        url: Url,
        token: &Secret<String>,
        timeout: Duration,
    ) -> Result<R, UpstreamError>
    where
        R: DeserializeOwned,
    {
        self.send(self.client.get(url), token, timeout).await
    }

    /// POST a JSON body and read back a JSON document
    pub async fn post_json<T, R>(
        &self,
        url: Url,
        token: &Secret<String>,
        body: &T,
        timeout: Duration,
    ) -> Result<R, UpstreamError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.client.post(url).json(body), token, timeout)
            .await
    }

    async fn send<R>(
        &self,
        request: RequestBuilder,
        token: &Secret<String>,
        timeout: Duration,
    ) -> Result<R, UpstreamError>
    where
        R: DeserializeOwned,
    {
        let response = request
            .bearer_auth(token.expose_secret())
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        response.json::<R>().await.map_err(UpstreamError::Decode)
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
