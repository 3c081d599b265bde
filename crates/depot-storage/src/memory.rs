//! In-memory remote media backend
//!
//! Keeps uploaded objects in process memory. Used for local development and
//! tests; behaves like the HTTP backend at the trait boundary, including
//! partitioned deletes.

use crate::traits::{RemoteAsset, RemoteMedia, StoreResult, UploadContext};
use async_trait::async_trait;
use chrono::Utc;
use depot_core::StorageKind;
use std::collections::HashMap;
use std::sync::Mutex;

#[allow(dead_code)] // context and data model the stored object; only asset is read back
struct StoredObject {
    asset: RemoteAsset,
    context: UploadContext,
    data: Vec<u8>,
}

/// In-memory implementation of [`RemoteMedia`].
pub struct MemoryRemoteMedia {
    base_url: String,
    // Keyed by (partition, public_id): partitions are independent namespaces,
    // exactly as on the remote store.
    objects: Mutex<HashMap<(StorageKind, String), StoredObject>>,
}

impl MemoryRemoteMedia {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryRemoteMedia {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    fn object_url(&self, kind: StorageKind, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            kind.as_remote_type(),
            key
        )
    }

    /// Number of stored objects across all partitions.
    pub fn object_count(&self) -> usize {
        self.objects.lock().expect("memory store poisoned").len()
    }
}

impl Default for MemoryRemoteMedia {
    fn default() -> Self {
        MemoryRemoteMedia::new("memory://depot")
    }
}

#[async_trait]
impl RemoteMedia for MemoryRemoteMedia {
    async fn upload(
        &self,
        key: &str,
        kind: StorageKind,
        bytes: Vec<u8>,
        context: &UploadContext,
    ) -> StoreResult<RemoteAsset> {
        let format = key
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && !ext.contains('/'));

        let asset = RemoteAsset {
            public_id: key.to_string(),
            secure_url: self.object_url(kind, key),
            bytes: bytes.len() as i64,
            format,
            resource_type: kind,
            created_at: Utc::now(),
        };

        let mut objects = self.objects.lock().expect("memory store poisoned");
        objects.insert(
            (kind, key.to_string()),
            StoredObject {
                asset: asset.clone(),
                context: context.clone(),
                data: bytes,
            },
        );

        Ok(asset)
    }

    async fn resources(&self, prefix: &str, max_results: usize) -> StoreResult<Vec<RemoteAsset>> {
        let objects = self.objects.lock().expect("memory store poisoned");
        Ok(objects
            .values()
            .filter(|object| object.asset.public_id.starts_with(prefix))
            .take(max_results)
            .map(|object| object.asset.clone())
            .collect())
    }

    async fn destroy(&self, public_id: &str, kind: StorageKind) -> StoreResult<bool> {
        let mut objects = self.objects.lock().expect("memory store poisoned");
        Ok(objects.remove(&(kind, public_id.to_string())).is_some())
    }
}
