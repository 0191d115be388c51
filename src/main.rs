//! Samudra proxy: backend for the Samudra dashboard
//!
//! This is the main entry point for the application.

use anyhow::Result;
use samudra_proxy::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let env_file = dotenvy::dotenv().ok();

    // Load configuration
    let settings_path = config::find_settings_file();
    let mut settings = config::load_from(settings_path.as_deref())?;
    settings.static_files.private_files.extend(env_file);

    // Initialize logging; RUST_LOG wins over the debug toggle
    let default_level = if settings.server.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting samudra-proxy v{}", samudra_proxy::VERSION);
    match &settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    if !settings.upstream.has_token() {
        warn!("GOPHER_AUTH_TOKEN is not set; upstream calls will be rejected");
    }
    info!("Upstream search API: {}", settings.upstream.url);
    info!("Serving static files from: {}", settings.static_files.root.display());

    // Initialize HTTP client
    let client = HttpClient::new()?;

    // Bind address
    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);

    // Create application state
    let state = AppState::from_settings(settings, client)?;

    // Create router
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
