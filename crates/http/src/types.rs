//! API types mirroring the Lugha backend serializers

use serde::{Deserialize, Serialize};

/// Access/refresh token pair returned by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Response of the token refresh endpoint. The refresh token is only
/// present when the backend rotates it.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// New account registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Account fields echoed back on successful registration (no tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Current user profile
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub total_contributions: u64,
    #[serde(default)]
    pub total_validations: u64,
}

/// Partial profile update (PATCH semantics: absent fields are untouched)
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Language family grouping used by the browse pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCategory {
    Bantu,
    Nilotic,
    Cushitic,
    Other,
}

/// A language open for contributions
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub id: u64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub category: Option<LanguageCategory>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contributors_count: u64,
    #[serde(default)]
    pub words_count: u64,
    #[serde(default)]
    pub sentences_count: u64,
    #[serde(default)]
    pub audio_count: u64,
}

/// Aggregate counters for one language
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageStats {
    pub contributors: u64,
    pub words: u64,
    pub sentences: u64,
}

/// Contribution medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionType {
    Text,
    Audio,
}

/// Granularity of a contributed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Word,
    Sentence,
    Paragraph,
    Story,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Story => "story",
        }
    }
}

/// Peer-review lifecycle of a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    Pending,
    Validated,
    Rejected,
}

impl ContributionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Rejected => "rejected",
        }
    }
}

/// New text contribution request
#[derive(Debug, Clone, Serialize)]
pub struct NewTextContribution {
    /// Target language id
    pub language: u64,
    pub content_type: ContentType,
    #[serde(rename = "type")]
    pub contribution_type: ContributionType,
    pub original_text: String,
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Hide the contributor from leaderboards
    pub anonymous: bool,
}

/// New audio contribution: the recorded bytes plus the same text fields,
/// sent as multipart form data
#[derive(Debug, Clone)]
pub struct NewAudioContribution {
    pub language: u64,
    pub content_type: ContentType,
    pub original_text: String,
    pub translated_text: String,
    pub context: Option<String>,
    pub anonymous: bool,
    /// File name reported for the audio part
    pub file_name: String,
    /// MIME type of the recording, e.g. `audio/webm`
    pub mime_type: Option<String>,
    pub audio: Vec<u8>,
}

/// A contribution as returned by the list and detail endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Contribution {
    pub id: String,
    #[serde(rename = "type")]
    pub contribution_type: ContributionType,
    pub content_type: ContentType,
    pub original_text: String,
    pub translated_text: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub language_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub status: ContributionStatus,
    #[serde(default)]
    pub validations_count: u64,
    #[serde(default)]
    pub positive_validations: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Filters for the contribution list endpoint; serialized as the query
/// string
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContributionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContributionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_validate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_contributions: Option<bool>,
}

/// New validation verdict on a peer contribution
#[derive(Debug, Clone, Serialize)]
pub struct NewValidation {
    /// Contribution id being reviewed
    pub contribution: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A recorded validation
#[derive(Debug, Clone, Deserialize)]
pub struct Validation {
    pub id: u64,
    pub contribution: String,
    pub is_valid: bool,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// List responses come back either paginated (`{count, next, previous,
/// results}`) or as a bare array depending on the view
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    Paginated {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> Page<T> {
    /// The items regardless of pagination shape.
    pub fn results(&self) -> &[T] {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Bare(items) => items,
        }
    }

    /// Consume the page, keeping only the items.
    pub fn into_results(self) -> Vec<T> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Bare(items) => items,
        }
    }

    /// Total item count when the backend reports one, otherwise the length
    /// of the returned slice.
    pub fn count(&self) -> u64 {
        match self {
            Self::Paginated { count, .. } => *count,
            Self::Bare(items) => items.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_deserializes_paginated_shape() {
        let page: Page<Language> = serde_json::from_value(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "name": "Kikuyu", "code": "ki"},
                {"id": 2, "name": "Dholuo", "code": "luo"},
            ]
        }))
        .unwrap();

        assert_eq!(page.count(), 2);
        assert_eq!(page.results()[0].code, "ki");
    }

    #[test]
    fn page_deserializes_bare_array() {
        let page: Page<Language> =
            serde_json::from_value(json!([{"id": 7, "name": "Maasai", "code": "mas"}])).unwrap();

        assert_eq!(page.count(), 1);
        assert_eq!(page.into_results()[0].name, "Maasai");
    }

    #[test]
    fn text_contribution_serializes_type_field() {
        let contribution = NewTextContribution {
            language: 3,
            content_type: ContentType::Sentence,
            contribution_type: ContributionType::Text,
            original_text: "Good morning".into(),
            translated_text: "Habari ya asubuhi".into(),
            context: None,
            anonymous: false,
        };

        let value = serde_json::to_value(&contribution).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["content_type"], "sentence");
        assert!(value.get("context").is_none());
    }

    #[test]
    fn contribution_query_serializes_only_set_filters() {
        let query = ContributionQuery {
            to_validate: Some(true),
            status: Some(ContributionStatus::Pending),
            ..Default::default()
        };

        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded["to_validate"], json!(true));
        assert_eq!(encoded["status"], json!("pending"));
        assert!(encoded.get("language").is_none());
    }
}
