//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use verity_core::Config;

/// Initialize telemetry, then build the application.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.log_json)
        .context("Failed to initialize telemetry")?;

    build_app(config).await
}

/// Validate configuration, prepare storage and assemble the router.
///
/// Does not touch the global tracing subscriber, so tests can call it
/// repeatedly.
pub async fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment,
        upload_dir = %config.upload_dir.display(),
        static_dir = %config.static_dir.display(),
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), storage));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
