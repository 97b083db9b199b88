//! Client configuration and initialization

use crate::auth::session::notify_session_expired;
use crate::config::AuthConfig;
use crate::storage::BrowserCredentialStore;
use lugha_http::{ClientError, LughaClient};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use web_sys::window;

/// Global client instance
static API_CLIENT: Lazy<Mutex<Option<LughaClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return format!("{origin}{}", AuthConfig::API_PREFIX);
        }
    }

    // Default to relative URLs
    AuthConfig::API_PREFIX.to_string()
}

/// Get the shared API client, creating it on first use. The client reads
/// tokens from browser storage at dispatch time, so one instance serves
/// logged-in and logged-out states alike.
pub fn api_client() -> Result<LughaClient, ClientError> {
    let mut client_lock = API_CLIENT.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = LughaClient::builder()
        .base_url(get_base_url())
        .credential_store(Arc::new(BrowserCredentialStore::new()))
        .on_session_expired(Arc::new(notify_session_expired))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
