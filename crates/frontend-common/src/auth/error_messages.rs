//! User-facing error message mappings

use lugha_http::ClientError;

/// Convert a client error into a message suitable for inline display.
///
/// Field-level validation messages from the backend are surfaced verbatim;
/// everything else gets a short generic message.
pub fn display(error: &ClientError) -> String {
    if let Some(fields) = error.field_errors() {
        let mut messages: Vec<String> = fields
            .iter()
            .map(|(field, errors)| format!("{field}: {}", errors.join(" ")))
            .collect();
        messages.sort();
        return messages.join("\n");
    }

    match error {
        ClientError::Request(_) => "Could not reach the server. Check your connection.".into(),
        ClientError::AuthenticationFailed(_) => "Your session has expired. Please log in again.".into(),
        ClientError::Forbidden(_) => "You do not have permission to do that.".into(),
        ClientError::NotFound(_) => "The requested item was not found.".into(),
        ClientError::BadRequest(message) => message.clone(),
        _ => "Something went wrong. Please try again.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_are_surfaced_verbatim() {
        let error = ClientError::BadRequest(
            r#"{"username":["This field is required."]}"#.into(),
        );
        assert_eq!(display(&error), "username: This field is required.");
    }

    #[test]
    fn auth_failure_prompts_relogin() {
        let error = ClientError::AuthenticationFailed("token invalid".into());
        assert!(display(&error).contains("log in again"));
    }

    #[test]
    fn plain_bad_request_body_passes_through() {
        let error = ClientError::BadRequest("Bad Request".into());
        assert_eq!(display(&error), "Bad Request");
    }
}
