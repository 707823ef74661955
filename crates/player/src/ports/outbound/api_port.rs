//! API Port - Typed HTTP boundary
//!
//! `ApiPort` is generic over the response type, so it is not object-safe.
//! Adapters implement the object-safe [`super::RawApiPort`]; the application
//! layer's `Api` wrapper provides this typed interface on top of it.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request could not be built (bad base URL, bad path)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    /// GET `path` (relative to the configured base URL) with query pairs
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError>;
}
