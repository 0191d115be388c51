//! Guard in front of static file serving

use super::state::AppState;
use crate::config::StaticSettings;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::path::Path;

/// Answer 404 for paths that must not reach `ServeDir`
pub async fn guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if is_servable(request.uri().path(), &state.settings.static_files) {
        next.run(request).await
    } else {
        tracing::debug!("Refusing static lookup: {}", request.uri().path());
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Whether a request path may be looked up under the static root.
///
/// Refuses any decoded segment starting with `.` (`..`, `.env`, `.git`) and
/// anything that resolves to one of the private files.
pub fn is_servable(path: &str, settings: &StaticSettings) -> bool {
    let decoded = match urlencoding::decode(path) {
        Ok(decoded) => decoded,
        Err(_) => return false,
    };
    let relative = decoded.trim_start_matches('/');

    if relative
        .split(['/', '\\'])
        .any(|segment| segment.starts_with('.'))
    {
        return false;
    }

    // Missing files are left to ServeDir's own 404
    let target = match settings.root.join(relative).canonicalize() {
        Ok(target) => target,
        Err(_) => return true,
    };
    !settings
        .private_files
        .iter()
        .filter_map(|p| Path::new(p).canonicalize().ok())
        .any(|private| private == target)
}
