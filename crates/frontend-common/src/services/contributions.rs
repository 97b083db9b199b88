//! Contribution API service

use crate::auth::error_messages;
use crate::client::api_client;
use lugha_http::types::{
    Contribution, ContributionQuery, NewAudioContribution, NewTextContribution, Page,
};

/// Contribution API service
#[derive(Clone)]
pub struct ContributionService;

impl ContributionService {
    /// Create a new contribution API service
    pub fn new() -> Self {
        Self
    }

    /// Submit a text contribution
    pub async fn submit_text(
        &self,
        contribution: &NewTextContribution,
    ) -> Result<Contribution, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .create_text_contribution(contribution)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// Submit an audio contribution
    pub async fn submit_audio(
        &self,
        contribution: &NewAudioContribution,
    ) -> Result<Contribution, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .create_audio_contribution(contribution)
            .await
            .map_err(|e| error_messages::display(&e))
    }

    /// List contributions matching the given filters
    pub async fn contributions(
        &self,
        query: &ContributionQuery,
    ) -> Result<Vec<Contribution>, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .contributions(query)
            .await
            .map(Page::into_results)
            .map_err(|e| error_messages::display(&e))
    }

    /// Contributions submitted by the logged-in user
    pub async fn my_contributions(&self) -> Result<Vec<Contribution>, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .my_contributions()
            .await
            .map(Page::into_results)
            .map_err(|e| error_messages::display(&e))
    }

    /// Peer contributions awaiting this user's verdict
    pub async fn pending_validations(&self) -> Result<Vec<Contribution>, String> {
        let client = api_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .pending_validations()
            .await
            .map(Page::into_results)
            .map_err(|e| error_messages::display(&e))
    }
}

impl Default for ContributionService {
    fn default() -> Self {
        Self::new()
    }
}
