//! Credential store
//!
//! Decides who can log in. The static map is the only shipped
//! implementation; an external identity provider would implement the same
//! trait.

use async_trait::async_trait;
use std::collections::HashMap;
use subtle::ConstantTimeEq;

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact-match check of a username/secret pair.
    async fn verify(&self, username: &str, secret: &str) -> bool;
}

/// Process-wide username→secret map, loaded at startup and immutable for the
/// process lifetime. No creation or rotation API.
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new(users: impl IntoIterator<Item = (String, String)>) -> Self {
        StaticCredentials {
            users: users.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CredentialStore for StaticCredentials {
    async fn verify(&self, username: &str, secret: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| secure_compare(expected, secret))
    }
}
