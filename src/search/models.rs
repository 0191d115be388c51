//! Search request, upstream payload and response models

use super::error::{RequestError, UpstreamError};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{value::RawValue, Value};
use std::collections::HashMap;

/// Upstream source searched by the dashboard
pub const SOURCE_TWITTER: &str = "twitter";

/// Upstream search mode for free-text queries
pub const SEARCH_BY_QUERY: &str = "searchbyquery";

/// Search request as posted by the dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Search query string; anything but a string counts as missing
    #[serde(default, deserialize_with = "string_or_none")]
    pub query: Option<String>,
    /// Maximum number of posts to return
    #[serde(default)]
    pub max_results: Option<u32>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Validate the request and build the upstream payload
    pub fn into_payload(self) -> Result<SearchPayload, RequestError> {
        let query = match self.query {
            Some(q) if !q.is_empty() => q,
            _ => return Err(RequestError::MissingQuery),
        };
        let max_results = self.max_results.unwrap_or(crate::DEFAULT_MAX_RESULTS);
        Ok(SearchPayload::twitter(query, max_results))
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(query) => Ok(Some(query)),
        _ => Ok(None),
    }
}

/// Job submission body sent to the upstream API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPayload {
    #[serde(rename = "type")]
    pub source: String,
    pub arguments: SearchArguments,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchArguments {
    #[serde(rename = "type")]
    pub mode: String,
    pub query: String,
    pub max_results: u32,
}

impl SearchPayload {
    /// Query-based Twitter search
    pub fn twitter(query: impl Into<String>, max_results: u32) -> Self {
        Self {
            source: SOURCE_TWITTER.to_string(),
            arguments: SearchArguments {
                mode: SEARCH_BY_QUERY.to_string(),
                query: query.into(),
                max_results,
            },
        }
    }

    pub fn query(&self) -> &str {
        &self.arguments.query
    }

    pub fn max_results(&self) -> u32 {
        self.arguments.max_results
    }
}

/// Reply to the dashboard after a job was accepted upstream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSubmitted {
    #[serde(rename = "jobUUID")]
    pub job_uuid: String,
}

/// Pull the job identifier out of an upstream submit response
pub fn extract_job_uuid(response: &Value) -> Result<String, UpstreamError> {
    response
        .get("uuid")
        .and_then(Value::as_str)
        .filter(|uuid| !uuid.is_empty())
        .map(str::to_owned)
        .ok_or(UpstreamError::MissingUuid)
}

/// Number of entries in a job result, for logging only
pub fn entry_count(result: &RawValue) -> usize {
    let raw = result.get();
    if let Ok(items) = serde_json::from_str::<Vec<IgnoredAny>>(raw) {
        return items.len();
    }
    if let Ok(map) = serde_json::from_str::<HashMap<String, IgnoredAny>>(raw) {
        return map.len();
    }
    if raw.trim() == "null" {
        0
    } else {
        1
    }
}
