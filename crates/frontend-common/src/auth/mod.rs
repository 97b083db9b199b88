//! Session lifecycle helpers

pub mod error_messages;
pub mod session;
