use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ApiError;

/// Designer content fields an approved update request may merge.
/// Identity fields (`user_id`) and anything unknown are dropped at
/// merge time, never written through.
pub const MERGEABLE_FIELDS: &[&str] = &[
    "logo_url",
    "background_url",
    "short_description",
    "about_text",
];

/// Review state of an update request. Write-once-terminal:
/// pending -> approved | rejected, nothing after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    /// Comment stored when the reviewing admin leaves none
    pub fn default_admin_comment(&self) -> &'static str {
        match self {
            RequestStatus::Approved => "Your update request has been approved.",
            RequestStatus::Rejected => "Your update request has been rejected.",
            RequestStatus::Pending => "",
        }
    }
}

/// Tagged value inside `requested_updates`. Untagged serde repr, so the
/// wire shape stays the plain JSON the clients already send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Absent,
}

/// A pending/decided proposal to change a designer's content fields
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateRequest {
    pub request_id: String,
    pub designer_id: String,
    pub requested_updates: HashMap<String, FieldValue>,
    pub status: RequestStatus,
    pub admin_comments: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitUpdateRequestPayload {
    pub requested_updates: HashMap<String, FieldValue>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewUpdateRequestPayload {
    pub decision: String,
    pub admin_comments: Option<String>,
}

/// Parse a review decision; only the two terminal states are legal input
pub fn parse_decision(decision: &str) -> Result<RequestStatus, ApiError> {
    match RequestStatus::parse(decision) {
        Some(RequestStatus::Approved) => Ok(RequestStatus::Approved),
        Some(RequestStatus::Rejected) => Ok(RequestStatus::Rejected),
        _ => Err(ApiError::Validation(format!(
            "Invalid decision '{}': expected 'approved' or 'rejected'",
            decision
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ] {
            assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RequestStatus::parse("garbage"), None);
    }

    #[test]
    fn decisions_only_accept_terminal_states() {
        assert_eq!(parse_decision("approved").unwrap(), RequestStatus::Approved);
        assert_eq!(parse_decision("rejected").unwrap(), RequestStatus::Rejected);
        assert!(matches!(
            parse_decision("pending"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(parse_decision("yes"), Err(ApiError::Validation(_))));
    }

    #[test]
    fn field_values_deserialize_untagged() {
        let parsed: HashMap<String, FieldValue> = serde_json::from_str(
            r#"{"short_description": "Oak tables", "featured": true, "rating": 4.5, "logo_url": null}"#,
        )
        .unwrap();

        assert_eq!(
            parsed["short_description"],
            FieldValue::Text("Oak tables".to_string())
        );
        assert_eq!(parsed["featured"], FieldValue::Flag(true));
        assert_eq!(parsed["rating"], FieldValue::Number(4.5));
        assert_eq!(parsed["logo_url"], FieldValue::Absent);
    }

    #[test]
    fn default_comments_depend_on_decision() {
        assert!(RequestStatus::Approved
            .default_admin_comment()
            .contains("approved"));
        assert!(RequestStatus::Rejected
            .default_admin_comment()
            .contains("rejected"));
    }
}
