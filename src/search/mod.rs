//! Search relay module
//!
//! Validates dashboard search requests, submits them to the upstream API
//! as jobs, and fetches job results. Job state lives entirely upstream.

mod error;
mod models;
mod upstream;

pub use error::{RequestError, UpstreamError};
pub use models::*;
pub use upstream::{SearchBackend, UpstreamClient};
