//! HTTP networking module
//!
//! Provides the outbound HTTP client used to reach the upstream search API.

mod client;

pub use client::HttpClient;
