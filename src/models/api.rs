//! Wire form of an outbound API request and its decoded response body

use serde_json::Value;

/// Expected format of the API response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Text,
}

impl ResponseFormat {
    /// Value for the outgoing `Accept` header
    pub fn accept(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Text => "text/plain",
        }
    }
}

/// A fully assembled request: endpoint path, ordered query pairs, and the
/// format the response body will be decoded as
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub response_format: ResponseFormat,
}

/// Decoded body of a successful API response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// Convert into a JSON value for embedding in a result record.
    /// Text bodies become JSON strings; JSON bodies pass through untouched.
    pub fn into_value(self) -> Value {
        match self {
            ApiBody::Json(value) => value,
            ApiBody::Text(text) => Value::String(text),
        }
    }
}
