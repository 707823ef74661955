//! HTTP adapter for the catalog REST API
//!
//! Desktop uses `reqwest`, the browser build uses `gloo-net`. Both resolve
//! paths against the configured base URL and return the body as JSON.

use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default catalog API base URL.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default request timeout (desktop only; the browser applies its own).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url =
            Url::parse(&raw).map_err(|e| ApiError::InvalidRequest(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

impl Default for ApiAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_BASE_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "GET");

        let response = gloo_net::http::Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::HttpStatus {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
