//! Lugha HTTP client
//!
//! Typed client for the Lugha community language-data API. Handles bearer
//! token attachment from an injected credential store and recovers from an
//! expired access token by refreshing it and retrying the failed request
//! exactly once.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::store::{CredentialStore, Credentials, MemoryCredentialStore};
pub use client::{LughaClient, LughaClientBuilder};
