//! Internal state of the searchable multi-select
//!
//! The selected value is controlled by the parent (it arrives as a prop and
//! leaves through `on_change`); visibility and the search term are owned here.

use pokeform_domain::{
    filter, option_state, remove, toggle, DropdownEvent, DropdownState, SelectOption,
    SelectionLimit, SelectionSet,
};

/// Where a click inside the component landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectClick<'a> {
    /// The control surface; toggles the list
    Control,
    /// A row of the open list
    Option(&'a SelectOption),
    /// The remove button of a selected chip
    RemoveChip(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectState {
    dropdown: DropdownState,
    /// Page presses already accounted for; the page counter only grows
    seen_page_presses: u64,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open
    }

    pub fn search_term(&self) -> &str {
        &self.dropdown.search_term
    }

    pub fn has_search(&self) -> bool {
        self.dropdown.has_search()
    }

    /// Options matching the current search term
    pub fn visible_options(&self, options: &[SelectOption]) -> Vec<SelectOption> {
        filter(options, &self.dropdown.search_term)
    }

    /// Handle a click inside the component.
    ///
    /// Returns the new selection when the click changes it. Only the control
    /// toggles visibility, and only while `interactive`; a disabled row
    /// changes nothing.
    pub fn click(
        &mut self,
        target: SelectClick<'_>,
        current: &SelectionSet,
        limit: SelectionLimit,
        interactive: bool,
    ) -> Option<SelectionSet> {
        match target {
            SelectClick::Control => {
                self.dropdown.apply(DropdownEvent::Toggle, interactive);
                None
            }
            SelectClick::Option(option) => {
                if option_state(current, option, limit).disabled {
                    return None;
                }
                Some(toggle(current, option, limit))
            }
            SelectClick::RemoveChip(value) => Some(remove(current, value)),
        }
    }

    /// Sync with the page-wide press counter; any new press closes the list.
    pub fn observe_page_presses(&mut self, presses: u64) {
        if presses > self.seen_page_presses {
            self.seen_page_presses = presses;
            self.dropdown.apply(DropdownEvent::OutsidePointer, true);
        }
    }

    pub fn press_escape(&mut self) {
        self.dropdown.apply(DropdownEvent::Escape, true);
    }

    pub fn set_search(&mut self, term: String) {
        self.dropdown.apply(DropdownEvent::Search(term), true);
    }

    pub fn clear_search(&mut self) {
        self.dropdown.apply(DropdownEvent::ClearSearch, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: SelectionLimit = SelectionLimit::AtMost(2);

    fn options() -> Vec<SelectOption> {
        ["Bulbasaur", "Charmander", "Squirtle", "Pikachu", "Pidgey"]
            .iter()
            .map(|label| SelectOption::new(label.to_lowercase(), *label))
            .collect()
    }

    fn opened() -> SelectState {
        let mut state = SelectState::new();
        state.click(SelectClick::Control, &SelectionSet::new(), LIMIT, true);
        state
    }

    #[test]
    fn control_click_toggles_visibility() {
        let mut state = opened();
        assert!(state.is_open());
        let changed = state.click(SelectClick::Control, &SelectionSet::new(), LIMIT, true);
        assert_eq!(changed, None);
        assert!(!state.is_open());
    }

    #[test]
    fn control_click_ignored_while_loading_or_disabled() {
        let mut state = SelectState::new();
        state.click(SelectClick::Control, &SelectionSet::new(), LIMIT, false);
        assert!(!state.is_open());
    }

    #[test]
    fn new_page_press_closes_once() {
        let mut state = opened();
        state.observe_page_presses(1);
        assert!(!state.is_open());

        // the same count seen again (effect re-run) must not close a reopened list
        state.click(SelectClick::Control, &SelectionSet::new(), LIMIT, true);
        state.observe_page_presses(1);
        assert!(state.is_open());

        state.observe_page_presses(2);
        assert!(!state.is_open());
    }

    #[test]
    fn initial_press_count_leaves_list_alone() {
        let mut state = opened();
        state.observe_page_presses(0);
        assert!(state.is_open());
    }

    #[test]
    fn escape_closes() {
        let mut state = opened();
        state.press_escape();
        assert!(!state.is_open());
    }

    #[test]
    fn search_narrows_visible_options() {
        let mut state = opened();
        state.set_search("PI".into());
        let labels: Vec<String> = state
            .visible_options(&options())
            .iter()
            .map(|o| o.label().to_string())
            .collect();
        assert_eq!(labels, vec!["Pikachu", "Pidgey"]);

        state.clear_search();
        assert_eq!(state.visible_options(&options()).len(), 5);
    }

    #[test]
    fn no_matches_yields_empty_list() {
        let mut state = opened();
        state.set_search("zzz".into());
        assert!(state.visible_options(&options()).is_empty());
    }

    #[test]
    fn chip_removal_shrinks_selection_without_toggling() {
        let opts = options();
        let current: SelectionSet = opts.iter().take(3).cloned().collect();

        for mut state in [SelectState::new(), opened()] {
            let was_open = state.is_open();
            let next = state
                .click(SelectClick::RemoveChip("charmander"), &current, SelectionLimit::Unbounded, true)
                .unwrap();
            assert_eq!(next.values(), vec!["bulbasaur", "squirtle"]);
            assert_eq!(state.is_open(), was_open);
        }
    }

    #[test]
    fn chip_removal_works_while_loading() {
        let opts = options();
        let current: SelectionSet = opts.iter().take(1).cloned().collect();
        let mut state = SelectState::new();

        let next = state.click(SelectClick::RemoveChip("bulbasaur"), &current, LIMIT, false);
        assert_eq!(next, Some(SelectionSet::new()));
        assert!(!state.is_open());
    }

    #[test]
    fn disabled_row_click_is_ignored() {
        let opts = options();
        let current: SelectionSet = opts.iter().take(2).cloned().collect();
        let mut state = opened();

        assert!(option_state(&current, &opts[4], LIMIT).disabled);
        assert_eq!(state.click(SelectClick::Option(&opts[4]), &current, LIMIT, true), None);
        assert!(state.is_open());
    }

    #[test]
    fn selected_row_click_deselects_even_at_capacity() {
        let opts = options();
        let current: SelectionSet = opts.iter().take(2).cloned().collect();

        let next = opened()
            .click(SelectClick::Option(&opts[0]), &current, LIMIT, true)
            .unwrap();
        assert_eq!(next.values(), vec!["charmander"]);
    }

    #[test]
    fn row_click_keeps_list_open() {
        let opts = options();
        let mut state = opened();
        let next = state
            .click(SelectClick::Option(&opts[3]), &SelectionSet::new(), LIMIT, true)
            .unwrap();
        assert!(next.contains("pikachu"));
        assert!(state.is_open());
    }
}
