//! Samudra proxy: backend for the Samudra coastal-hazard dashboard
//!
//! Relays social-media searches from the dashboard to the Gopher search API,
//! passes job results back, and serves the dashboard's static files.

pub mod config;
pub mod network;
pub mod search;
pub mod web;

pub use config::Settings;
pub use search::{SearchBackend, SearchRequest, UpstreamClient, UpstreamError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of results requested when the caller does not say
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Search submission timeout in seconds
pub const SEARCH_TIMEOUT: u64 = 30;

/// Result lookup timeout in seconds
pub const RESULT_TIMEOUT: u64 = 60;
