//! Catalog state - the option list of the team multi-select
//!
//! Loaded once when the form mounts. While loading the multi-select shows a
//! spinner and ignores clicks; a failure leaves the list empty and stores a
//! message for the operator.

use dioxus::prelude::*;
use std::sync::Arc;

use pokeform_domain::SelectOption;

use crate::application::dto::CatalogPage;
use crate::ports::outbound::{CatalogError, CatalogPort};

pub const CATALOG_LOAD_ERROR: &str = "Failed to fetch Pokemon list. Please try again later.";

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub options: Signal<Vec<SelectOption>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            options: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error: Signal::new(None),
        }
    }

    /// Fetch the first catalog page and publish it as options
    pub async fn load(mut self, catalog: Arc<dyn CatalogPort>, limit: u32) {
        self.loading.set(true);
        let (options, error) = catalog_outcome(catalog.list_catalog(limit, 0).await);
        self.options.set(options);
        self.error.set(error);
        self.loading.set(false);
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Options and user-facing error for a listing result
pub fn catalog_outcome(
    result: Result<CatalogPage, CatalogError>,
) -> (Vec<SelectOption>, Option<String>) {
    match result {
        Ok(page) => (page.to_options(), None),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching Pokemon list");
            (Vec::new(), Some(CATALOG_LOAD_ERROR.to_string()))
        }
    }
}
