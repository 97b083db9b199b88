//! Account and token API client methods

use super::store::Credentials;
use super::{ClientError, LughaClient};
use crate::types::{ProfileUpdate, RegisterRequest, RegisteredUser, TokenPair, UserProfile};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl LughaClient {
    /// Create a new account. Never writes tokens; callers log in (or
    /// redirect to login) afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ClientError> {
        let req = self.request(Method::POST, "/auth/register/").json(request);
        self.execute(req).await
    }

    /// Obtain a token pair for the given credentials and persist it.
    /// On failure any previously stored pair is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ClientError> {
        let req = self
            .request(Method::POST, "/token/")
            .json(&LoginRequest { username, password });
        let pair: TokenPair = self.execute(req).await?;

        self.store().set(Credentials {
            access: pair.access.clone(),
            refresh: pair.refresh.clone(),
        });
        Ok(pair)
    }

    /// Fetch the profile of the logged-in user
    pub async fn current_user(&self) -> Result<UserProfile, ClientError> {
        self.execute_with_refresh(|client| client.request(Method::GET, "/auth/user/"))
            .await
    }

    /// Patch profile fields of the logged-in user
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ClientError> {
        self.execute_with_refresh(|client| {
            client.request(Method::PATCH, "/auth/user/").json(update)
        })
        .await
    }
}
