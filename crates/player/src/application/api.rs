//! Typed API wrapper for application services.
//!
//! `ApiPort` is generic over the response type and therefore not object-safe.
//! The composition root stores an `Arc<dyn RawApiPort>` adapter; `Api` wraps
//! it and implements the typed `ApiPort` interface via serde_json conversions.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let query: Vec<(String, String)> = query
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect();
        let value = self.raw.get_json(path, &query).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
