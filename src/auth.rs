//! Pluggable authentication
//!
//! Access control is an injected collaborator, not part of the calculation
//! core. The CLI enforces it only when the settings file carries credentials;
//! embedders can supply any `Authenticator` implementation.

use std::collections::HashMap;

/// Capability to verify a username/password pair
pub trait Authenticator {
    /// Return true when the pair is valid
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Authenticator backed by a static credential map
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    /// Build from a username -> password map
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Whether any credentials are configured
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == password)
    }
}
