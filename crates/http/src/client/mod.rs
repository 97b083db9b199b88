//! Lugha API client
//!
//! Every request goes out with the access token current in the credential
//! store at dispatch time. Authenticated calls additionally run through a
//! one-shot refresh pipeline: a 401 triggers a single token refresh and a
//! single retry of the original request, never more.

pub mod auth;
pub mod contributions;
pub mod error;
pub mod languages;
pub mod store;
pub mod validations;

use std::sync::Arc;
use std::time::Duration;

use error::ClientError;
use reqwest::{header, Client, ClientBuilder, StatusCode};
use serde::Serialize;
use store::{CredentialStore, Credentials, MemoryCredentialStore};

use crate::types::RefreshResponse;

const DEFAULT_USER_AGENT: &str = "lugha-client/0.1.0";

/// Callback invoked after a failed refresh, once the stored credential pair
/// has been cleared. The surrounding application decides what "session
/// expired" means (the web frontend navigates to the login page).
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Lugha API client
#[derive(Clone)]
pub struct LughaClient {
    client: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl LughaClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> LughaClientBuilder {
        LughaClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential pair currently in the store, if logged in.
    pub fn credentials(&self) -> Option<Credentials> {
        self.store.get()
    }

    /// Drop the stored credential pair.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Create a request builder with the current access token attached
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(credentials) = self.store.get() {
            request = request.header(
                header::AUTHORIZATION,
                format!("Bearer {}", credentials.access),
            );
        }

        request
    }

    /// Execute a request and handle common errors, without the refresh
    /// pipeline. Used for public endpoints and for the refresh call itself.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute an authenticated request with one-shot refresh-and-retry.
    ///
    /// The request is rebuilt from `build` on retry so the new access token
    /// is picked up from the store; the retried-once flag is local to this
    /// call and never shared between concurrent requests.
    pub async fn execute_with_refresh<T, F>(&self, build: F) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        F: Fn(&Self) -> reqwest::RequestBuilder,
    {
        let mut retried = false;
        loop {
            let response = build(self).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.json().await?);
            }

            let message = response.text().await.unwrap_or_else(|_| status.to_string());

            if status != StatusCode::UNAUTHORIZED || retried {
                return Err(ClientError::from_status(status, message));
            }
            retried = true;

            let Some(credentials) = self.store.get() else {
                // Nothing to refresh with; the original 401 stands.
                self.store.clear();
                return Err(ClientError::from_status(status, message));
            };

            match self.refresh_access_token(&credentials).await {
                Ok(()) => {
                    tracing::debug!("access token refreshed, retrying original request");
                }
                Err(refresh_error) => {
                    tracing::warn!(error = %refresh_error, "token refresh failed, ending session");
                    self.store.clear();
                    if let Some(hook) = &self.on_session_expired {
                        hook();
                    }
                    return Err(refresh_error);
                }
            }
        }
    }

    /// Exchange the refresh token for a new access token and store it.
    /// Keeps the existing refresh token unless the backend rotates it.
    async fn refresh_access_token(&self, credentials: &Credentials) -> Result<(), ClientError> {
        let request = self
            .client
            .post(format!("{}/token/refresh/", self.base_url))
            .json(&RefreshRequest {
                refresh: &credentials.refresh,
            });
        let refreshed: RefreshResponse = self.execute(request).await?;

        self.store.set(Credentials {
            access: refreshed.access,
            refresh: refreshed
                .refresh
                .unwrap_or_else(|| credentials.refresh.clone()),
        });
        Ok(())
    }

    pub(crate) fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }
}

/// Builder for [`LughaClient`]
#[derive(Default)]
pub struct LughaClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn CredentialStore>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl LughaClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on WASM, where the browser decides)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the credential store shared with the surrounding application
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the callback invoked when a refresh fails and the session ends
    pub fn on_session_expired(mut self, hook: SessionExpiredHook) -> Self {
        self.on_session_expired = Some(hook);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<LughaClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(user_agent);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(user_agent).build()?
        };

        Ok(LughaClient {
            client,
            base_url,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new())),
            on_session_expired: self.on_session_expired,
        })
    }
}
