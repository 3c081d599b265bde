//! Configuration module
//!
//! Typed configuration built once at startup from process environment.
//! Remote-store credentials live in an explicit [`RemoteStoreConfig`] that is
//! handed to the storage backend constructor; nothing reads them ambiently.

use std::env;

use crate::constants::DEFAULT_UPLOAD_PREFIX;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_REMOTE_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
const DEFAULT_USERS: &str = "student1:password123,teacher1:password123";

/// Which remote-media backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteBackend {
    Http,
    Memory,
}

/// Connection settings for the remote media store.
#[derive(Clone, Debug)]
pub struct RemoteStoreConfig {
    pub backend: RemoteBackend,
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub upload_prefix: String,
    /// Static username/secret pairs loaded at startup, immutable afterwards.
    pub users: Vec<(String, String)>,
    pub remote_store: RemoteStoreConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// Parse `user:secret,user:secret` pairs.
fn parse_users(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry
                .split_once(':')
                .map(|(user, secret)| (user.trim().to_string(), secret.to_string()))
                .filter(|(user, secret)| !user.is_empty() && !secret.is_empty())
                .ok_or_else(|| ConfigError::InvalidVar {
                    name: "DEPOT_USERS",
                    value: entry.to_string(),
                })
        })
        .collect()
}

impl Config {
    /// Build configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let upload_prefix = env::var("UPLOAD_PREFIX")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_PREFIX.to_string())
            .trim_matches('/')
            .to_string();

        let users = parse_users(&env::var("DEPOT_USERS").unwrap_or_else(|_| DEFAULT_USERS.to_string()))?;

        let backend = match env::var("REMOTE_STORE_BACKEND").as_deref() {
            Ok("memory") => RemoteBackend::Memory,
            Ok("http") | Err(_) => RemoteBackend::Http,
            Ok(other) => {
                return Err(ConfigError::InvalidVar {
                    name: "REMOTE_STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let remote_store = match backend {
            RemoteBackend::Http => RemoteStoreConfig {
                backend,
                base_url: env::var("REMOTE_STORE_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_REMOTE_BASE_URL.to_string()),
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
            },
            RemoteBackend::Memory => RemoteStoreConfig {
                backend,
                base_url: "memory://depot".to_string(),
                cloud_name: String::new(),
                api_key: String::new(),
                api_secret: String::new(),
            },
        };

        Ok(Config {
            server_port,
            cors_origins,
            environment,
            upload_prefix,
            users,
            remote_store,
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}
