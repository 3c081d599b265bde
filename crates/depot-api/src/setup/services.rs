//! Service construction.

use crate::auth::{CredentialStore, PresenceVerifier, StaticCredentials, TokenVerifier};
use crate::state::AppState;
use depot_core::Config;
use depot_storage::{create_remote_media, MediaStore};
use std::sync::Arc;

/// Build the application state: remote-store backend, media store, and the
/// auth capabilities.
pub fn initialize_services(config: Config) -> Arc<AppState> {
    let remote = create_remote_media(&config.remote_store);
    let store = MediaStore::new(remote, config.upload_prefix.clone());

    let credentials: Arc<dyn CredentialStore> =
        Arc::new(StaticCredentials::new(config.users.clone()));
    // Presence-only verification: issued tokens are never checked again.
    let verifier: Arc<dyn TokenVerifier> = Arc::new(PresenceVerifier);

    Arc::new(AppState {
        config,
        store,
        credentials,
        verifier,
    })
}
