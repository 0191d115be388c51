//! Web server module
//!
//! Provides the dashboard-facing HTTP API and static file serving.

mod error;
mod handlers;
mod routes;
mod state;
mod static_files;

pub use error::{ApiError, ErrorBody};
pub use handlers::{PublicConfig, SupabaseConfig};
pub use routes::create_router;
pub use state::AppState;
