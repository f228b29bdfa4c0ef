//! Liver disease prediction service
//!
//! Loads the classifier and scaler artifacts at startup, then serves
//! predictions over HTTP until shut down.

use anyhow::{Context, Result};
use liver_server::{api, config};
use server_lib::{artifacts, ServiceMetrics};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting liver-server");

    // Load configuration
    let config = config::ServerConfig::load()?;
    info!(
        port = config.port,
        model_path = %config.model_path,
        scaler_path = %config.scaler_path,
        "Server configured"
    );

    // Load artifacts; the service refuses to start without them
    let context = artifacts::load_context(
        Path::new(&config.model_path),
        Path::new(&config.scaler_path),
    )
    .context("Failed to load prediction artifacts")?;

    // Initialize metrics
    let metrics = ServiceMetrics::new();
    metrics.set_model_version(context.model_version());

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(Arc::new(context), metrics));
    app_state.logger.log_startup(SERVICE_VERSION, config.port);

    // Start the HTTP server
    let _api_handle = tokio::spawn(api::serve(config.port, app_state.clone()));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    app_state.logger.log_shutdown("SIGINT received");
    info!("Shutting down");

    Ok(())
}
