//! Credential storage abstraction
//!
//! Tokens live in shared storage (browser `localStorage` in the web
//! frontend) rather than in the client itself, so every request reads the
//! pair current at dispatch time and a refresh triggered by one request is
//! visible to the next.

use std::sync::Mutex;

/// Access/refresh token pair as returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Short-lived bearer token sent with every authenticated request.
    pub access: String,
    /// Longer-lived token used solely to obtain a new access token.
    pub refresh: String,
}

/// Where the client reads and writes the credential pair.
///
/// Absence of a pair means logged out.
pub trait CredentialStore: Send + Sync {
    /// The credential pair current at the time of the call, if any.
    fn get(&self) -> Option<Credentials>;

    /// Persist a credential pair, replacing any previous one.
    fn set(&self, credentials: Credentials);

    /// Remove the credential pair (logout or session expiry).
    fn clear(&self);
}

/// In-memory credential store for tests and native tools.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: Mutex<Option<Credentials>>,
}

impl MemoryCredentialStore {
    /// Create an empty (logged-out) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a credential pair.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            inner: Mutex::new(Some(credentials)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Credentials> {
        self.inner
            .lock()
            .expect("credential store lock poisoned")
            .clone()
    }

    fn set(&self, credentials: Credentials) {
        *self.inner.lock().expect("credential store lock poisoned") = Some(credentials);
    }

    fn clear(&self) {
        *self.inner.lock().expect("credential store lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(access: &str, refresh: &str) -> Credentials {
        Credentials {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_replaces_previous_pair() {
        let store = MemoryCredentialStore::with_credentials(pair("a1", "r1"));
        store.set(pair("a2", "r1"));
        assert_eq!(store.get(), Some(pair("a2", "r1")));
    }

    #[test]
    fn clear_removes_both_tokens() {
        let store = MemoryCredentialStore::with_credentials(pair("a1", "r1"));
        store.clear();
        assert_eq!(store.get(), None);
    }
}
