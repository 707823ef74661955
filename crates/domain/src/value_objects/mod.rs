//! Value objects of the selection engine

mod select_option;
mod selection_limit;
mod selection_set;

pub use select_option::SelectOption;
pub use selection_limit::SelectionLimit;
pub use selection_set::SelectionSet;
