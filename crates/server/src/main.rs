//! AquaSense server - rainfall prediction dashboard
//!
//! Loads the trained regression model and region encoder once at startup,
//! then serves the dashboard page and prediction API until stopped.

use anyhow::{Context, Result};
use aquasense_lib::health::{components, HealthRegistry};
use aquasense_lib::PredictionPipeline;
use aquasense_server::{api, config::ServerConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!(version = SERVER_VERSION, "Starting aquasense-server");

    let config = ServerConfig::load()?;
    info!(
        model_path = %config.model_path.display(),
        encoder_path = %config.encoder_path.display(),
        "Server configured"
    );

    let health = HealthRegistry::new();
    health.register(components::MODEL).await;
    health.register(components::ENCODER).await;

    // Both artifacts load before the listener binds; a missing or corrupt
    // file aborts startup here and no request is ever served.
    let pipeline = PredictionPipeline::load(&config.model_path, &config.encoder_path)
        .context("failed to load prediction artifacts")?;
    info!(regions = pipeline.regions().len(), "Prediction pipeline ready");

    let state = Arc::new(api::AppState::new(
        Arc::new(pipeline),
        config.years.clone(),
        health.clone(),
    ));
    health.set_ready(true).await;

    let api_handle = tokio::spawn(api::serve(config.port, state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}
