//! Depot Core Library
//!
//! This crate provides the domain models, policy validation, error types, and
//! configuration shared by the depot gateway components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, RemoteBackend, RemoteStoreConfig};
pub use error::{AppError, AuthError, ErrorMetadata, LogLevel, ValidationError};
pub use models::{Asset, AssetResponse, StorageKind};
pub use validation::{validate_upload, PolicyError};
