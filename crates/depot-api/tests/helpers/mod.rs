//! Shared test fixtures: an app wired to an in-memory remote store that
//! counts every call it receives.

#![allow(dead_code)] // not every test binary touches every helper

use async_trait::async_trait;
use axum_test::TestServer;
use depot_api::auth::{CredentialStore, PresenceVerifier, StaticCredentials, TokenVerifier};
use depot_api::setup::routes::setup_routes;
use depot_api::state::AppState;
use depot_core::{Config, RemoteBackend, RemoteStoreConfig, StorageKind};
use depot_storage::{
    MediaStore, MemoryRemoteMedia, RemoteAsset, RemoteMedia, StoreResult, UploadContext,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const UPLOAD_PREFIX: &str = "cloud-storage/uploads";

/// Delegates to [`MemoryRemoteMedia`] while counting calls, so tests can
/// assert that no remote work happened (or exactly how much did).
pub struct CountingRemote {
    inner: MemoryRemoteMedia,
    pub upload_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub destroy_calls: AtomicUsize,
}

impl CountingRemote {
    pub fn new() -> Self {
        CountingRemote {
            inner: MemoryRemoteMedia::default(),
            upload_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            destroy_calls: AtomicUsize::new(0),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
            + self.list_calls.load(Ordering::SeqCst)
            + self.destroy_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteMedia for CountingRemote {
    async fn upload(
        &self,
        key: &str,
        kind: StorageKind,
        bytes: Vec<u8>,
        context: &UploadContext,
    ) -> StoreResult<RemoteAsset> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.upload(key, kind, bytes, context).await
    }

    async fn resources(&self, prefix: &str, max_results: usize) -> StoreResult<Vec<RemoteAsset>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resources(prefix, max_results).await
    }

    async fn destroy(&self, public_id: &str, kind: StorageKind) -> StoreResult<bool> {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.destroy(public_id, kind).await
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub remote: Arc<CountingRemote>,
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        upload_prefix: UPLOAD_PREFIX.to_string(),
        users: vec![
            ("student1".to_string(), "password123".to_string()),
            ("teacher1".to_string(), "password123".to_string()),
        ],
        remote_store: RemoteStoreConfig {
            backend: RemoteBackend::Memory,
            base_url: "memory://depot".to_string(),
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
        },
    }
}

/// Build a test application around a counting in-memory remote store.
pub fn setup_test_app() -> TestApp {
    let remote = Arc::new(CountingRemote::new());
    let config = test_config();

    let store = MediaStore::new(remote.clone(), config.upload_prefix.clone());
    let credentials: Arc<dyn CredentialStore> =
        Arc::new(StaticCredentials::new(config.users.clone()));
    let verifier: Arc<dyn TokenVerifier> = Arc::new(PresenceVerifier);

    let state = Arc::new(AppState {
        config,
        store,
        credentials,
        verifier,
    });
    let router = setup_routes(state).expect("router setup");

    TestApp {
        server: TestServer::new(router).expect("test server"),
        remote,
    }
}
