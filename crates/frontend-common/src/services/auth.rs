//! Authentication API service

use crate::auth::error_messages;
use crate::client::api_client;
use lugha_http::types::{ProfileUpdate, RegisterRequest, RegisteredUser, TokenPair, UserProfile};

/// Authentication API service
#[derive(Clone)]
pub struct AuthService;

impl AuthService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Log in with username and password; tokens are persisted by the
    /// client on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .login(username, password)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// Create a new account. The caller triggers login afterwards; no
    /// tokens are written here.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .register(request)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// Fetch the logged-in user's profile
    pub async fn current_user(&self) -> Result<UserProfile, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .current_user()
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// Update profile fields of the logged-in user
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .update_profile(update)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// Drop the stored tokens
    pub fn logout(&self) -> Result<(), String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.logout();
        Ok(())
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
