//! Language browsing API service

use crate::auth::error_messages;
use crate::client::api_client;
use lugha_http::types::{Language, LanguageStats};

/// Language browsing API service
#[derive(Clone)]
pub struct LanguageService;

impl LanguageService {
    /// Create a new language API service
    pub fn new() -> Self {
        Self
    }

    /// List languages open for contributions
    pub async fn languages(&self) -> Result<Vec<Language>, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .languages()
            .await
            .map(lugha_http::types::Page::into_results)
            .map_err(|e| error_messages::display(&e))
    }

    /// Fetch one language by code
    pub async fn language(&self, code: &str) -> Result<Language, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .language(code)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// Fetch aggregate counters for one language (leaderboard data)
    pub async fn language_stats(&self, code: &str) -> Result<LanguageStats, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .language_stats(code)
            .await
            .map_err(|e| error_messages::display(&e))
    }
}

impl Default for LanguageService {
    fn default() -> Self {
        Self::new()
    }
}
