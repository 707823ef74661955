//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for the platform-specific
//! operations needed by the UI layer, so presentation code does not carry
//! `#[cfg(target_arch)]` branches.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

/// Unified platform services port
#[cfg_attr(test, mockall::automock)]
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (window title on desktop)
    fn set_page_title(&self, title: &str);

    /// Lock or unlock scrolling of the page body.
    ///
    /// Prefer [`crate::ui::presentation::effects::ScrollLock`], which pairs
    /// every lock with an unlock.
    fn set_scroll_locked(&self, locked: bool);
}
