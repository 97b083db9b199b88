//! Language browsing API client methods

use super::{ClientError, LughaClient};
use crate::types::{Language, LanguageStats, Page};
use reqwest::Method;

impl LughaClient {
    /// List languages open for contributions
    pub async fn languages(&self) -> Result<Page<Language>, ClientError> {
        let req = self.request(Method::GET, "/languages/");
        self.execute(req).await
    }

    /// Fetch one language by ISO-style code
    pub async fn language(&self, code: &str) -> Result<Language, ClientError> {
        let req = self.request(Method::GET, &format!("/languages/{code}/"));
        self.execute(req).await
    }

    /// Fetch aggregate counters for one language
    pub async fn language_stats(&self, code: &str) -> Result<LanguageStats, ClientError> {
        let req = self.request(Method::GET, &format!("/languages/{code}/stats/"));
        self.execute(req).await
    }
}
