//! Authentication capabilities
//!
//! Two deliberately separate concerns: [`CredentialStore`] answers "who can
//! log in"; [`TokenVerifier`] answers "what proves a request is authorized".
//! The shipped verifier checks header presence only — login-issued tokens
//! are never stored or re-verified. That weakness is a documented property
//! of this gateway, kept explicit by the capability split.

pub mod credentials;
pub mod middleware;
pub mod models;
pub mod token;

pub use credentials::{CredentialStore, StaticCredentials};
pub use middleware::auth_middleware;
pub use models::AuthContext;
pub use token::{PresenceVerifier, TokenVerifier};
