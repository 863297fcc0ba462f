//! Application setup and initialization
//!
//! This module contains all application initialization logic, kept out of main.rs so
//! tests can build the same router.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::auth::SessionAuth;
use crate::state::AppState;
use anyhow::{Context, Result};
use pdfshelf_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Fail fast on misconfiguration; storage settings are checked per request instead.
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment(),
        key_strategy = %config.key_strategy(),
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config);
    let auth = SessionAuth::from_config(&config).context("Failed to initialize session auth")?;

    let state = Arc::new(AppState::new(config.clone(), storage, auth));
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
