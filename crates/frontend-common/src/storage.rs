//! Browser-local credential storage
//!
//! Persists the token pair under fixed `localStorage` keys so a login
//! survives page reloads. Absence of either key means logged out.

use crate::config::AuthConfig;
use lugha_http::{CredentialStore, Credentials};
use web_sys::Storage;

/// Credential store backed by `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCredentialStore;

impl BrowserCredentialStore {
    pub fn new() -> Self {
        Self
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentialStore {
    fn get(&self) -> Option<Credentials> {
        let storage = local_storage()?;
        let access = storage.get_item(AuthConfig::ACCESS_TOKEN_KEY).ok()??;
        let refresh = storage.get_item(AuthConfig::REFRESH_TOKEN_KEY).ok()??;
        Some(Credentials { access, refresh })
    }

    fn set(&self, credentials: Credentials) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, tokens not persisted");
            return;
        };
        if storage
            .set_item(AuthConfig::ACCESS_TOKEN_KEY, &credentials.access)
            .and_then(|()| storage.set_item(AuthConfig::REFRESH_TOKEN_KEY, &credentials.refresh))
            .is_err()
        {
            tracing::warn!("failed to write tokens to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AuthConfig::ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(AuthConfig::REFRESH_TOKEN_KEY);
        }
    }
}
