//! Remote media abstraction
//!
//! [`RemoteMedia`] is the opaque capability the external store exposes:
//! upload, enumerate, and per-partition delete. Backends translate errors
//! uniformly and never retry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use depot_core::{AppError, StorageKind};
use serde::{Deserialize, Serialize};

/// Remote store operation errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Asset not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote store error: {0}")]
    Unknown(String),
}

/// Result type for remote store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            StoreError::Transport(msg) => AppError::Transport(msg),
            StoreError::Unknown(msg) => AppError::Unknown(msg),
        }
    }
}

/// An asset as the remote store reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAsset {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub bytes: i64,
    #[serde(default)]
    pub format: Option<String>,
    pub resource_type: StorageKind,
    pub created_at: DateTime<Utc>,
}

/// Opaque metadata attached to an upload. The remote store carries it as a
/// side channel; it is never used for access control.
#[derive(Debug, Clone)]
pub struct UploadContext {
    pub original_filename: String,
    pub uploaded_by: String,
    pub upload_date: DateTime<Utc>,
}

/// The external media store's capability surface.
///
/// Assets are partitioned by [`StorageKind`] on the remote side; `destroy`
/// therefore needs the partition, and reports whether the asset was found in
/// it. One call per operation; error translation is pass-through.
#[async_trait]
pub trait RemoteMedia: Send + Sync {
    /// Upload `bytes` under `key` into the given partition, attaching
    /// `context` as opaque metadata. Returns the stored asset.
    async fn upload(
        &self,
        key: &str,
        kind: StorageKind,
        bytes: Vec<u8>,
        context: &UploadContext,
    ) -> StoreResult<RemoteAsset>;

    /// Enumerate assets whose public id starts with `prefix`, across all
    /// partitions, capped at `max_results`. Order is whatever the remote
    /// store returns.
    async fn resources(&self, prefix: &str, max_results: usize) -> StoreResult<Vec<RemoteAsset>>;

    /// Delete `public_id` from the given partition. `Ok(false)` means the
    /// asset does not live in that partition.
    async fn destroy(&self, public_id: &str, kind: StorageKind) -> StoreResult<bool>;
}
