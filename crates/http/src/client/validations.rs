//! Validation API client methods

use super::{ClientError, LughaClient};
use crate::types::{NewValidation, Page, Validation};
use reqwest::Method;

impl LughaClient {
    /// Record a verdict on a peer contribution
    pub async fn create_validation(
        &self,
        validation: &NewValidation,
    ) -> Result<Validation, ClientError> {
        self.execute_with_refresh(|client| {
            client
                .request(Method::POST, "/validations/create/")
                .json(validation)
        })
        .await
    }

    /// List validations performed by the logged-in user
    pub async fn validations(&self) -> Result<Page<Validation>, ClientError> {
        self.execute_with_refresh(|client| client.request(Method::GET, "/validations/"))
            .await
    }
}
