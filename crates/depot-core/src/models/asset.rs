use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Remote-store partition a file is stored and deleted under.
///
/// Policy classification only ever produces `Binary` or `Media`; `Streaming`
/// is a reserved partition that exists on the remote side and is probed
/// during deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum StorageKind {
    #[serde(rename = "raw")]
    Binary,
    #[serde(rename = "image")]
    Media,
    #[serde(rename = "video")]
    Streaming,
}

impl StorageKind {
    /// Resource-type name this kind maps to on the remote store's wire API.
    pub fn as_remote_type(&self) -> &'static str {
        match self {
            StorageKind::Binary => "raw",
            StorageKind::Media => "image",
            StorageKind::Streaming => "video",
        }
    }

    /// Parse a remote resource-type name back into a kind.
    pub fn from_remote_type(value: &str) -> Option<Self> {
        match value {
            "raw" => Some(StorageKind::Binary),
            "image" => Some(StorageKind::Media),
            "video" => Some(StorageKind::Streaming),
            _ => None,
        }
    }
}

impl Display for StorageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_remote_type())
    }
}

/// One stored file, as exposed by the remote store and normalized by the
/// gateway. `public_id` is the sole identity key; `filename` is whatever the
/// uploader supplied and may collide across assets.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub public_id: String,
    pub filename: String,
    pub url: String,
    pub size_bytes: i64,
    pub format: String,
    pub storage_kind: StorageKind,
    pub created_at: DateTime<Utc>,
}

/// Wire representation of an asset in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssetResponse {
    pub public_id: String,
    pub filename: String,
    pub url: String,
    pub size: i64,
    pub format: String,
    pub resource_type: StorageKind,
    pub created_at: DateTime<Utc>,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        AssetResponse {
            public_id: asset.public_id,
            filename: asset.filename,
            url: asset.url,
            size: asset.size_bytes,
            format: asset.format,
            resource_type: asset.storage_kind,
            created_at: asset.created_at,
        }
    }
}
