//! Contribution submission and listing API client methods

use super::{ClientError, LughaClient};
use crate::types::{
    Contribution, ContributionQuery, ContributionStatus, NewAudioContribution,
    NewTextContribution, Page,
};
use reqwest::multipart::{Form, Part};
use reqwest::Method;

impl NewAudioContribution {
    fn audio_part(&self) -> Part {
        let part = Part::bytes(self.audio.clone()).file_name(self.file_name.clone());
        match &self.mime_type {
            // An unparsable MIME type falls back to an untyped part.
            Some(mime) => part
                .mime_str(mime)
                .unwrap_or_else(|_| Part::bytes(self.audio.clone()).file_name(self.file_name.clone())),
            None => part,
        }
    }

    fn to_form(&self) -> Form {
        let form = Form::new()
            .part("audio_file", self.audio_part())
            .text("language", self.language.to_string())
            .text("content_type", self.content_type.as_str())
            .text("original_text", self.original_text.clone())
            .text("translated_text", self.translated_text.clone())
            .text("anonymous", self.anonymous.to_string());

        match &self.context {
            Some(context) => form.text("context", context.clone()),
            None => form,
        }
    }
}

impl LughaClient {
    /// Submit a text contribution
    pub async fn create_text_contribution(
        &self,
        contribution: &NewTextContribution,
    ) -> Result<Contribution, ClientError> {
        self.execute_with_refresh(|client| {
            client
                .request(Method::POST, "/contributions/text/")
                .json(contribution)
        })
        .await
    }

    /// Submit an audio contribution as multipart form data
    pub async fn create_audio_contribution(
        &self,
        contribution: &NewAudioContribution,
    ) -> Result<Contribution, ClientError> {
        self.execute_with_refresh(|client| {
            client
                .request(Method::POST, "/contributions/audio/")
                .multipart(contribution.to_form())
        })
        .await
    }

    /// List contributions matching the given filters
    pub async fn contributions(
        &self,
        query: &ContributionQuery,
    ) -> Result<Page<Contribution>, ClientError> {
        self.execute_with_refresh(|client| {
            client.request(Method::GET, "/contributions/").query(query)
        })
        .await
    }

    /// Peer contributions awaiting a validation verdict from this user
    pub async fn pending_validations(&self) -> Result<Page<Contribution>, ClientError> {
        self.contributions(&ContributionQuery {
            to_validate: Some(true),
            status: Some(ContributionStatus::Pending),
            ..Default::default()
        })
        .await
    }

    /// Contributions submitted by the logged-in user
    pub async fn my_contributions(&self) -> Result<Page<Contribution>, ClientError> {
        self.contributions(&ContributionQuery {
            my_contributions: Some(true),
            ..Default::default()
        })
        .await
    }
}
