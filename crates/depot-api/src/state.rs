//! Application state.
//!
//! Everything here is immutable after startup; requests share it read-only
//! behind an `Arc`.

use crate::auth::{CredentialStore, TokenVerifier};
use depot_core::Config;
use depot_storage::MediaStore;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub store: MediaStore,
    pub credentials: Arc<dyn CredentialStore>,
    pub verifier: Arc<dyn TokenVerifier>,
}
