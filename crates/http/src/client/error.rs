//! Client error types

use std::collections::HashMap;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Bad request; the body is kept verbatim so callers can surface
    /// field-level validation messages
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this error means the session is no longer usable.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Per-field validation messages from a 400 response, when the backend
    /// supplies them as a JSON object of `field -> message(s)`.
    pub fn field_errors(&self) -> Option<HashMap<String, Vec<String>>> {
        let Self::BadRequest(body) = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        let mut fields = HashMap::new();
        for (name, messages) in object {
            let messages = match messages {
                serde_json::Value::String(message) => vec![message.clone()],
                serde_json::Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => continue,
            };
            fields.insert(name.clone(), messages);
        }
        (!fields.is_empty()).then_some(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_statuses_to_variants() {
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, "x".into()),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "x".into()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, "x".into()),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "x".into()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "x".into()),
            ClientError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn only_auth_failures_count_as_expired() {
        assert!(ClientError::AuthenticationFailed("nope".into()).is_auth_expired());
        assert!(!ClientError::Forbidden("nope".into()).is_auth_expired());
    }

    #[test]
    fn parses_field_errors_from_validation_body() {
        let error = ClientError::BadRequest(
            r#"{"username":["This field is required."],"password":"Too short."}"#.into(),
        );
        let fields = error.field_errors().unwrap();
        assert_eq!(fields["username"], vec!["This field is required."]);
        assert_eq!(fields["password"], vec!["Too short."]);
    }

    #[test]
    fn non_json_body_has_no_field_errors() {
        let error = ClientError::BadRequest("Bad Request".into());
        assert_eq!(error.field_errors(), None);
    }
}
