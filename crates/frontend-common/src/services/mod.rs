//! Per-domain API services
//!
//! Single-call wrappers around the shared client; errors come back as
//! display-ready strings for the page components. All recovery logic lives
//! in the client itself.

pub mod auth;
pub mod contributions;
pub mod languages;
pub mod validations;

pub use auth::AuthService;
pub use contributions::ContributionService;
pub use languages::LanguageService;
pub use validations::ValidationService;
