//! Scoped UI side effects
//!
//! Effects that touch global page state are acquired as guards and released
//! when the guard drops, so every path that hides the owning component
//! (close button, backdrop, Escape, unmount) releases them.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::{use_platform, Platform};

/// Body scroll lock held while a dialog is visible
pub struct ScrollLock {
    platform: Platform,
}

impl ScrollLock {
    pub fn acquire(platform: Platform) -> Self {
        platform.set_scroll_locked(true);
        Self { platform }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.platform.set_scroll_locked(false);
    }
}

/// Lock body scrolling for the lifetime of the calling component.
pub fn use_scroll_lock() {
    let platform = use_platform();
    let lock = use_hook(|| Rc::new(RefCell::new(Some(ScrollLock::acquire(platform)))));
    use_drop(move || {
        lock.borrow_mut().take();
    });
}
