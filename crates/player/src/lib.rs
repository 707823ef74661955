//! Pokeform Player crate.
//!
//! Trainer registration client: UI, application logic and infrastructure
//! adapters. Multi-platform support is provided via compile-time `cfg`
//! selection (desktop webview natively, browser on wasm32).

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, ShellKind};
