//! Media store adapter
//!
//! [`MediaStore`] is what the gateway talks to: it generates storage keys,
//! attaches upload context, normalizes remote assets, caps listings, and
//! resolves deletes with an ordered probe across remote partitions.

use crate::keys::generate_upload_key;
use crate::traits::{RemoteAsset, RemoteMedia, StoreError, StoreResult, UploadContext};
use depot_core::constants::MAX_LIST_RESULTS;
use depot_core::{Asset, StorageKind};
use std::sync::Arc;

/// Partition order for delete probes. An id alone does not disclose which
/// partition its asset lives in, so deletion tries each in turn and stops at
/// the first hit. The order is fixed policy; changing it changes only the
/// number of remote calls made before success, never the outcome.
pub const DELETE_PROBE_ORDER: [StorageKind; 3] = [
    StorageKind::Binary,
    StorageKind::Media,
    StorageKind::Streaming,
];

/// The gateway's interface to the remote media store.
#[derive(Clone)]
pub struct MediaStore {
    remote: Arc<dyn RemoteMedia>,
    upload_prefix: String,
}

impl MediaStore {
    pub fn new(remote: Arc<dyn RemoteMedia>, upload_prefix: impl Into<String>) -> Self {
        MediaStore {
            remote,
            upload_prefix: upload_prefix.into(),
        }
    }

    /// Normalize a remote asset: filename is the last path segment of the
    /// public id, format falls back to the filename extension when the remote
    /// store omits it (it does for binary uploads).
    fn normalize(remote: RemoteAsset) -> Asset {
        let filename = remote
            .public_id
            .rsplit('/')
            .next()
            .unwrap_or("unknown")
            .to_string();
        let format = remote.format.unwrap_or_else(|| {
            filename
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .unwrap_or_default()
        });

        Asset {
            public_id: remote.public_id,
            filename,
            url: remote.secure_url,
            size_bytes: remote.bytes,
            format,
            storage_kind: remote.resource_type,
            created_at: remote.created_at,
        }
    }

    /// Upload one file into the given partition and return the normalized
    /// asset. The remote store durably holds the file once this returns;
    /// there is no rollback path.
    pub async fn store(
        &self,
        bytes: Vec<u8>,
        original_filename: &str,
        kind: StorageKind,
        context: &UploadContext,
    ) -> StoreResult<Asset> {
        let key = generate_upload_key(&self.upload_prefix, original_filename);
        tracing::debug!(key = %key, kind = %kind, size = bytes.len(), "Uploading to remote store");
        let remote = self.remote.upload(&key, kind, bytes, context).await?;
        Ok(Self::normalize(remote))
    }

    /// Enumerate assets under the gateway's namespace, capped at
    /// [`MAX_LIST_RESULTS`]. No ordering is imposed on the remote's result.
    pub async fn list(&self) -> StoreResult<Vec<Asset>> {
        let prefix = format!("{}/", self.upload_prefix);
        let assets = self
            .remote
            .resources(&prefix, MAX_LIST_RESULTS)
            .await?
            .into_iter()
            .take(MAX_LIST_RESULTS)
            .map(Self::normalize)
            .collect();
        Ok(assets)
    }

    /// Delete an asset by public id, probing partitions in
    /// [`DELETE_PROBE_ORDER`] and stopping at the first hit. All partitions
    /// missing the id means the asset does not exist.
    pub async fn destroy(&self, public_id: &str) -> StoreResult<()> {
        for kind in DELETE_PROBE_ORDER {
            if self.remote.destroy(public_id, kind).await? {
                tracing::debug!(public_id = %public_id, kind = %kind, "Deleted from remote store");
                return Ok(());
            }
        }
        Err(StoreError::NotFound)
    }
}
