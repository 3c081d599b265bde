//! Remote media backend selection.

use crate::{HttpRemoteMedia, MemoryRemoteMedia, RemoteMedia};
use depot_core::{RemoteBackend, RemoteStoreConfig};
use std::sync::Arc;

/// Create a remote media backend based on configuration.
pub fn create_remote_media(config: &RemoteStoreConfig) -> Arc<dyn RemoteMedia> {
    match config.backend {
        RemoteBackend::Http => Arc::new(HttpRemoteMedia::new(config.clone())),
        RemoteBackend::Memory => Arc::new(MemoryRemoteMedia::new(config.base_url.clone())),
    }
}
