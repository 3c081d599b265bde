//! Error types module
//!
//! The gateway's error taxonomy, unified under [`AppError`]. Every failure a
//! handler can produce maps to exactly one variant, and [`ErrorMetadata`]
//! describes how each renders over HTTP.

use crate::validation::PolicyError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like policy rejections
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NO_TOKEN")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Authentication failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("No token")]
    MissingToken,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Request-shape failures on upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No file provided")]
    NoFile,

    #[error("No file selected")]
    EmptyFilename,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("File not found")]
    NotFound,

    #[error("Storage transport error: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Unknown(String),
}

/// Static metadata per variant: (http_status, error_code, log_level).
/// client_message stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::Auth(AuthError::MissingToken) => (401, "NO_TOKEN", LogLevel::Debug),
        AppError::Auth(AuthError::InvalidCredentials) => {
            (401, "INVALID_CREDENTIALS", LogLevel::Debug)
        }
        AppError::Validation(ValidationError::NoFile) => (400, "NO_FILE", LogLevel::Debug),
        AppError::Validation(ValidationError::EmptyFilename) => {
            (400, "EMPTY_FILENAME", LogLevel::Debug)
        }
        AppError::Policy(PolicyError::DisallowedType) => (400, "DISALLOWED_TYPE", LogLevel::Debug),
        AppError::Policy(PolicyError::TooLarge) => (400, "FILE_TOO_LARGE", LogLevel::Debug),
        AppError::NotFound => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::Transport(_) => (500, "STORAGE_TRANSPORT", LogLevel::Error),
        AppError::Unknown(_) => (500, "STORAGE_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Error type name for structured log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Auth(AuthError::MissingToken) => "MissingToken",
            AppError::Auth(AuthError::InvalidCredentials) => "InvalidCredentials",
            AppError::Validation(ValidationError::NoFile) => "NoFile",
            AppError::Validation(ValidationError::EmptyFilename) => "EmptyFilename",
            AppError::Policy(PolicyError::DisallowedType) => "DisallowedType",
            AppError::Policy(PolicyError::TooLarge) => "TooLarge",
            AppError::NotFound => "NotFound",
            AppError::Transport(_) => "Transport",
            AppError::Unknown(_) => "Unknown",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            // Internal storage details never reach the client.
            AppError::Transport(_) | AppError::Unknown(_) => {
                "Failed to access storage".to_string()
            }
            other => other.to_string(),
        }
    }
}
