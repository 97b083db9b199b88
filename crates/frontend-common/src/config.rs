//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "token";

    /// Local storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// Route navigated to when the session expires
    pub const LOGIN_PATH: &'static str = "/login";

    /// Path prefix the backend API is served under
    pub const API_PREFIX: &'static str = "/api";
}
