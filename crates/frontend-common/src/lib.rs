//! Shared browser glue for the Lugha web frontend
//!
//! Wires the typed API client to browser-local token storage and the
//! session-expired redirect, and exposes thin per-domain services for the
//! page components to call.

pub mod auth;
pub mod client;
pub mod config;
pub mod services;
pub mod storage;

pub use client::api_client;
pub use config::AuthConfig;
pub use lugha_http::ClientError;
