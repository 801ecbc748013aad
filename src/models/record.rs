//! Per-job result records
//!
//! One record is emitted per input job, in input order: either the API
//! response body on success or the captured error message on failure.

use crate::models::api::ApiBody;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single scrape job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub success: bool,

    /// API response body; present only when `success` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,

    /// Error message; present only when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultRecord {
    /// Record for a job whose API call succeeded
    pub fn ok(body: ApiBody) -> Self {
        Self {
            success: true,
            response: Some(body.into_value()),
            error: None,
        }
    }

    /// Record for a job that failed, carrying the error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_record_shape() {
        let record = ResultRecord::ok(ApiBody::Json(json!({"title": "Example"})));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({"success": true, "response": {"title": "Example"}})
        );
    }

    #[test]
    fn test_text_body_becomes_json_string() {
        let record = ResultRecord::ok(ApiBody::Text("# Heading".to_string()));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value, json!({"success": true, "response": "# Heading"}));
    }

    #[test]
    fn test_failure_record_shape() {
        let record = ResultRecord::failed("API error (status 500): boom");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({"success": false, "error": "API error (status 500): boom"})
        );
    }
}
