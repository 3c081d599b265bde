//! Depot API Library
//!
//! This crate provides the HTTP handlers, auth middleware, and application
//! setup for the depot gateway.

// Module declarations
mod api_doc;
pub mod constants;
pub mod setup;
pub mod telemetry;

// Public modules
pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
