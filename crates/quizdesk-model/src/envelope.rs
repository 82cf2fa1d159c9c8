//! Uniform JSON response wrapper.
//!
//! Every response, success or failure, is shaped as
//! `{ success, message, data?, count?, error? }`.

use serde::{Deserialize, Serialize};

/// Response body shared by the API and its clients.
///
/// # Examples
/// ```
/// use quizdesk_model::Envelope;
///
/// let listed = Envelope::listed("Quizzes retrieved successfully", vec![1, 2]);
/// assert_eq!(listed.count, Some(2));
///
/// let failed = Envelope::<()>::failure("Quiz not found", "No quiz exists with the provided ID");
/// assert!(!failed.success);
/// assert!(failed.data.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Short summary of the outcome.
    pub message: String,
    /// Payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data` for list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Failure detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            count: None,
            error: None,
        }
    }

    /// Failed response with a summary and a detail string.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            count: None,
            error: Some(error.into()),
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Successful list response; `count` mirrors the number of items.
    pub fn listed(message: impl Into<String>, items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::success(message, items)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn failure_omits_data_and_count() {
        let envelope = Envelope::<()>::failure("Validation failed", "\"title\" is required");
        let json = serde_json::to_value(&envelope).expect("serialise envelope");
        assert_eq!(
            json,
            json!({
                "success": false,
                "message": "Validation failed",
                "error": "\"title\" is required",
            })
        );
    }

    #[rstest]
    fn listed_reports_count() {
        let envelope = Envelope::listed("ok", vec!["a", "b", "c"]);
        let json = serde_json::to_value(&envelope).expect("serialise envelope");
        assert_eq!(json["count"], json!(3));
        assert_eq!(json["data"], json!(["a", "b", "c"]));
        assert!(json.get("error").is_none());
    }

    #[rstest]
    fn failure_body_decodes_into_any_payload_type() {
        let body = json!({"success": false, "message": "Quiz not found", "error": "gone"});
        let envelope: Envelope<Vec<String>> =
            serde_json::from_value(body).expect("decode failure envelope");
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("gone"));
    }
}
