//! Reusable UI components

pub mod category_badge;
pub mod modal;
pub mod select;

pub use category_badge::CategoryBadge;
pub use modal::Modal;
pub use select::Select;
