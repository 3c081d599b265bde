//! Application setup and initialization
//!
//! All startup logic lives here rather than in main.rs: service
//! construction, route wiring, and the server loop.

pub mod routes;
pub mod server;
pub mod services;

use crate::state::AppState;
use anyhow::Result;
use depot_core::Config;
use std::sync::Arc;

/// Initialize the entire application: telemetry, services, routes.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();
    tracing::info!(
        environment = %config.environment,
        upload_prefix = %config.upload_prefix,
        "Configuration loaded"
    );

    let state = services::initialize_services(config);
    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
