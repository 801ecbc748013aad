//! HTTP client for the Handinger API
//!
//! This module provides the production [`Transport`] implementation: one
//! authenticated GET per request, with non-2xx statuses classified into
//! transport errors.

use crate::core::transport::{Transport, TransportError};
use crate::models::api::{ApiBody, ApiRequest, ResponseFormat};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

/// Handinger API client with bearer-token authentication
pub struct HandingerClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HandingerClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Handinger API key, sent as a bearer token
    /// * `base_url` - API base URL, without a trailing slash
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Classify a non-2xx response into a transport error
    fn classify_status_error(status: u16, body: &str) -> TransportError {
        let message = if body.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            body.trim().to_string()
        };

        match status {
            401 | 403 => TransportError::Authentication(format!(
                "{message}. Check your HANDINGER_API_KEY configuration."
            )),
            429 => TransportError::RateLimit(message),
            _ => TransportError::Api { status, message },
        }
    }
}

#[async_trait]
impl Transport for HandingerClient {
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiBody, TransportError> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        debug!(%url, "sending API request");

        let response = self
            .client
            .get(&url)
            .query(&request.query)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, request.response_format.accept())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_status_error(status.as_u16(), &body));
        }

        match request.response_format {
            ResponseFormat::Json => {
                let value = response.json().await.map_err(|e| {
                    TransportError::Unexpected(format!("Failed to parse JSON response: {e}"))
                })?;
                Ok(ApiBody::Json(value))
            }
            ResponseFormat::Text => {
                let text = response.text().await.map_err(|e| {
                    TransportError::Unexpected(format!("Failed to read response body: {e}"))
                })?;
                Ok(ApiBody::Text(text))
            }
        }
    }
}
