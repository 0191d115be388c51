//! Route definitions

use super::state::AppState;
use super::{handlers, static_files};
use axum::{
    middleware,
    routing::{get, get_service, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let settings = &state.settings.static_files;
    let dashboard = ServeFile::new(settings.dashboard_path());
    let assets = get_service(ServeDir::new(&settings.root)).layer(
        middleware::from_fn_with_state(state.clone(), static_files::guard),
    );

    Router::new()
        // Dashboard
        .route("/", get_service(dashboard))
        // API routes
        .route("/health", get(handlers::health))
        .route("/api/config", get(handlers::public_config))
        .route("/api/twitter/search", post(handlers::twitter_search))
        .route(
            "/api/twitter/result/:job_uuid",
            get(handlers::twitter_result),
        )
        // Everything else is a static file under the root
        .fallback(assets)
        // Add middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Add state
        .with_state(state)
}
