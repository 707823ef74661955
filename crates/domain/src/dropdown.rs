//! Open/close and search state of the multi-select dropdown

use serde::{Deserialize, Serialize};

/// Something that happened to the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Click on the control itself.
    Toggle,
    /// Pointer pressed outside the rendered region.
    OutsidePointer,
    /// Cancellation key (Escape).
    Escape,
    /// Search input changed.
    Search(String),
    /// Search clear button.
    ClearSearch,
}

/// State exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DropdownState {
    pub is_open: bool,
    pub search_term: String,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event.
    ///
    /// `interactive` is false while the widget is disabled or loading; opening
    /// gestures are ignored then, closing signals are always honored.
    pub fn apply(&mut self, event: DropdownEvent, interactive: bool) {
        match event {
            DropdownEvent::Toggle => {
                if interactive {
                    self.is_open = !self.is_open;
                }
            }
            DropdownEvent::OutsidePointer | DropdownEvent::Escape => self.is_open = false,
            DropdownEvent::Search(term) => self.search_term = term,
            DropdownEvent::ClearSearch => self.search_term.clear(),
        }
    }

    /// Whether the search clear button should be shown.
    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }
}
