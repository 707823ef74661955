//! Catalog Port - the creature catalog as seen by the application
//!
//! Two black-box async calls: list one page of entries, fetch one detail
//! record. No retry, pagination beyond a single page, or caching.

use thiserror::Error;

use super::ApiError;
use crate::application::dto::{CatalogPage, CreatureDetail};

/// Default page size of the catalog listing
pub const DEFAULT_CATALOG_LIMIT: u32 = 151;

/// Errors from catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to fetch Pokemon list: {0}")]
    List(#[source] ApiError),

    #[error("Failed to fetch details for Pokemon {name}: {source}")]
    Detail {
        name: String,
        #[source]
        source: ApiError,
    },
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CatalogPort: Send + Sync {
    /// One page of the catalog, `limit` entries starting at `offset`
    async fn list_catalog(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError>;

    /// Detail record of the creature keyed by `name`
    async fn get_detail(&self, name: &str) -> Result<CreatureDetail, CatalogError>;
}
