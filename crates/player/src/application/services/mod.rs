//! Application services
//!
//! Services depend on port traits only; concrete adapters are wired in the
//! composition root (`runner.rs`).

pub mod catalog_service;
pub mod team_details_service;

pub use catalog_service::CatalogService;
pub use team_details_service::TeamDetailsService;
