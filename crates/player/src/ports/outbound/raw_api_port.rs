//! Raw API Port - Object-safe HTTP boundary
//!
//! The `ApiPort` trait is generic over response types which makes it not
//! object-safe. The composition root needs an abstraction that can be stored
//! behind `Arc<dyn ...>`.
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters.
//! The application layer provides a typed wrapper that implements `ApiPort` on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET `path` relative to the base URL, with `query` appended, as JSON
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError>;
}
