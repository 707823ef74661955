//! Catalog service - listing and detail lookups over REST
//!
//! Implements [`CatalogPort`] on top of a typed [`ApiPort`], so the form
//! and submission logic never see URLs or JSON.

use crate::application::dto::{CatalogPage, CreatureDetail};
use crate::ports::outbound::{ApiPort, CatalogError, CatalogPort};

/// Catalog service for the creature listing and detail records
pub struct CatalogService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CatalogService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl<A: ApiPort> CatalogPort for CatalogService<A> {
    async fn list_catalog(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError> {
        tracing::debug!(limit, offset, "Fetching catalog page");
        let page: CatalogPage = self
            .api
            .get(
                "pokemon",
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await
            .map_err(CatalogError::List)?;
        tracing::info!(
            received = page.results.len(),
            total = page.count,
            "Catalog page loaded"
        );
        Ok(page)
    }

    async fn get_detail(&self, name: &str) -> Result<CreatureDetail, CatalogError> {
        self.api
            .get(&format!("pokemon/{}", name), &[])
            .await
            .map_err(|source| CatalogError::Detail {
                name: name.to_string(),
                source,
            })
    }
}
