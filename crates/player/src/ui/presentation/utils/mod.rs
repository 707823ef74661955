//! Presentation utilities

pub mod category_colors;

pub use category_colors::category_color_class;
