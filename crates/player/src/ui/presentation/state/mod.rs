//! Presentation state containers

pub mod catalog_state;
pub mod page_pointer;
pub mod select_state;

pub use catalog_state::CatalogState;
pub use page_pointer::PagePointer;
pub use select_state::{SelectClick, SelectState};
