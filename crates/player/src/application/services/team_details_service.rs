//! Team details service - fetches the detail record of every team member
//!
//! All requests of a batch are in flight at the same time and the batch is
//! joined all-or-nothing: one failure fails the whole batch.

use futures_util::future::join_all;
use std::sync::Arc;

use pokeform_domain::SelectionSet;

use crate::application::dto::CreatureDetail;
use crate::ports::outbound::{CatalogError, CatalogPort};

pub struct TeamDetailsService {
    catalog: Arc<dyn CatalogPort>,
}

impl TeamDetailsService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Detail records in selection order.
    ///
    /// Every failure is logged; the first one (in selection order) is returned.
    pub async fn fetch_team(&self, team: &SelectionSet) -> Result<Vec<CreatureDetail>, CatalogError> {
        let requests = team
            .iter()
            .map(|member| self.catalog.get_detail(member.value()));
        let results = join_all(requests).await;

        let mut details = Vec::with_capacity(results.len());
        let mut first_error = None;
        for result in results {
            match result {
                Ok(detail) => details.push(detail),
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching Pokemon details");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{ApiError, MockCatalogPort};

    fn catalog_with_fixtures() -> MockCatalogPort {
        let mut catalog = MockCatalogPort::new();
        catalog.expect_get_detail().returning(|name| {
            fixtures::detail(name).ok_or_else(|| CatalogError::Detail {
                name: name.to_string(),
                source: ApiError::HttpStatus {
                    status: 404,
                    message: "Not Found".into(),
                },
            })
        });
        catalog
    }

    #[tokio::test]
    async fn fetches_every_member_in_selection_order() {
        let service = TeamDetailsService::new(Arc::new(catalog_with_fixtures()));
        let team = fixtures::team(4);

        let details = service.fetch_team(&team).await.unwrap();
        let names: Vec<&str> = details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "charmander", "squirtle", "pikachu"]);
    }

    #[tokio::test]
    async fn one_failure_fails_the_whole_batch() {
        let service = TeamDetailsService::new(Arc::new(catalog_with_fixtures()));
        let team: SelectionSet = vec![
            fixtures::option("pikachu"),
            fixtures::option("missingno"),
            fixtures::option("eevee"),
        ]
        .into();

        let err = service.fetch_team(&team).await.unwrap_err();
        assert!(matches!(err, CatalogError::Detail { ref name, .. } if name == "missingno"));
    }

    #[tokio::test]
    async fn empty_team_issues_no_requests() {
        let mut catalog = MockCatalogPort::new();
        catalog.expect_get_detail().never();
        let service = TeamDetailsService::new(Arc::new(catalog));

        assert!(service.fetch_team(&SelectionSet::new()).await.unwrap().is_empty());
    }
}
