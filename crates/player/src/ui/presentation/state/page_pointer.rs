//! Pointer presses anywhere on the page
//!
//! The page root counts every `mousedown` that reaches it. A component that
//! closes on outside presses stops propagation of its own `mousedown` and
//! reacts when the count grows, so the press that closes it still reaches
//! whatever element it landed on.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct PagePointer {
    presses: Signal<u64>,
}

impl PagePointer {
    pub fn new() -> Self {
        Self {
            presses: Signal::new(0),
        }
    }

    /// Record a press that reached the page root.
    pub fn press(mut self) {
        *self.presses.write() += 1;
    }

    /// Presses so far. Reading subscribes the caller.
    pub fn presses(&self) -> u64 {
        *self.presses.read()
    }
}

impl Default for PagePointer {
    fn default() -> Self {
        Self::new()
    }
}
