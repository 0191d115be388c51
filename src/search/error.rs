//! Search errors

use reqwest::StatusCode;
use thiserror::Error;

/// The dashboard sent a request that cannot be forwarded
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Query is required")]
    MissingQuery,
}

/// A call to the upstream search API failed
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS, or timeout failure
    #[error(transparent)]
    Transport(reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("upstream returned {status} for url: {url}")]
    Status { status: StatusCode, url: String },

    /// Upstream body was not valid JSON
    #[error("invalid upstream response: {0}")]
    Decode(reqwest::Error),

    /// Submit response carried no job identifier
    #[error("No uuid returned")]
    MissingUuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RequestError::MissingQuery.to_string(), "Query is required");
        assert_eq!(UpstreamError::MissingUuid.to_string(), "No uuid returned");
        let err = UpstreamError::Status {
            status: StatusCode::UNAUTHORIZED,
            url: "https://api.example/search".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "upstream returned 401 Unauthorized for url: https://api.example/search"
        );
    }
}
