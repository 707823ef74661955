//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod catalog_port;
pub mod platform_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use catalog_port::{CatalogError, CatalogPort, DEFAULT_CATALOG_LIMIT};
pub use platform_port::PlatformPort;
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use catalog_port::MockCatalogPort;
#[cfg(test)]
pub use platform_port::MockPlatformPort;
#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
