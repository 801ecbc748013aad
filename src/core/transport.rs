//! Transport abstraction over the Handinger HTTP API
//!
//! The dispatcher talks to the API through this trait so that batch
//! processing can be tested against a scripted transport without touching
//! the network.

use crate::models::api::{ApiBody, ApiRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// A transport that can execute one assembled API request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and decode the body per its response format
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiBody, TransportError>;
}
