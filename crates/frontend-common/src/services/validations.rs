//! Validation API service

use crate::auth::error_messages;
use crate::client::api_client;
use lugha_http::types::{NewValidation, Page, Validation};

/// Validation API service
#[derive(Clone)]
pub struct ValidationService;

impl ValidationService {
    /// Create a new validation API service
    pub fn new() -> Self {
        Self
    }

    /// Record a verdict on a peer contribution
    pub async fn submit(&self, validation: &NewValidation) -> Result<Validation, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .create_validation(validation)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// List validations performed by the logged-in user
    pub async fn validations(&self) -> Result<Vec<Validation>, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .validations()
            .await
            .map(Page::into_results)
            .map_err(|e| error_messages::display(&e))
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
