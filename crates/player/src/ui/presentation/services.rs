//! Service providers for the presentation layer
//!
//! The composition root builds one [`Services`] bundle and hands it to the
//! Dioxus launcher as context. Components reach the services through the
//! hooks below and never touch infrastructure adapter types.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::TeamDetailsService;
use crate::ports::outbound::{CatalogPort, DEFAULT_CATALOG_LIMIT};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogPort>,
    pub team_details: Arc<TeamDetailsService>,
    /// Number of catalog entries loaded into the team picker
    pub catalog_limit: u32,
}

impl Services {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            team_details: Arc::new(TeamDetailsService::new(catalog.clone())),
            catalog,
            catalog_limit: DEFAULT_CATALOG_LIMIT,
        }
    }

    pub fn with_catalog_limit(mut self, limit: u32) -> Self {
        self.catalog_limit = limit;
        self
    }
}

/// Hook to access the catalog port from context
pub fn use_catalog() -> Arc<dyn CatalogPort> {
    let services = use_context::<Services>();
    services.catalog.clone()
}

/// Hook to access the TeamDetailsService from context
pub fn use_team_details_service() -> Arc<TeamDetailsService> {
    let services = use_context::<Services>();
    services.team_details.clone()
}

/// Hook to read the configured catalog size
pub fn use_catalog_limit() -> u32 {
    use_context::<Services>().catalog_limit
}
