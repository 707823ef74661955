//! Pokeform domain: the pure logic behind the trainer registration form.
//!
//! - [`selection`]: case-insensitive option filtering and capacity-bounded
//!   click-to-toggle selection
//! - [`dropdown`]: open/close and search state of the multi-select
//! - [`validation`]: form state and field rules
//!
//! Nothing in this crate performs I/O or knows about rendering.

pub mod dropdown;
pub mod error;
pub mod selection;
pub mod validation;
pub mod value_objects;

pub use dropdown::{DropdownEvent, DropdownState};
pub use error::DomainError;
pub use selection::{filter, option_state, remove, toggle, OptionState};
pub use validation::{
    validate, FormField, FormState, ValidationResult, LETTERS_ONLY_MESSAGE,
    NAME_MAX_CHARS, NAME_MIN_CHARS, TEAM_SIZE, TEAM_SIZE_MESSAGE,
};
pub use value_objects::{SelectOption, SelectionLimit, SelectionSet};
