//! Option filter and selection engine
//!
//! Pure functions behind the searchable multi-select. They decide which
//! options are visible for a search term and how a click changes the current
//! selection; rendering lives in the player crate.

use crate::value_objects::{SelectOption, SelectionLimit, SelectionSet};

/// Options whose label contains `query`, ignoring case.
///
/// An empty query returns every option. Input order is preserved.
pub fn filter(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    if query.is_empty() {
        return options.to_vec();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Click-to-toggle semantics of an option row.
///
/// - selected: removed, remaining order preserved
/// - not selected and below the limit: appended
/// - not selected and at the limit: unchanged
///
/// The at-capacity case is a silent no-op; callers reflect it through
/// [`option_state`] rather than an error.
pub fn toggle(current: &SelectionSet, option: &SelectOption, limit: SelectionLimit) -> SelectionSet {
    let mut next = current.clone();
    if next.remove_value(option.value()) {
        return next;
    }
    if limit.admits_another(next.len()) {
        next.push(option.clone());
    }
    next
}

/// Remove the entry keyed by `value`; no-op when absent.
pub fn remove(current: &SelectionSet, value: &str) -> SelectionSet {
    let mut next = current.clone();
    next.remove_value(value);
    next
}

/// Render state of one option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionState {
    pub selected: bool,
    /// Not selected while the selection is full; clicks are ignored.
    pub disabled: bool,
}

pub fn option_state(
    current: &SelectionSet,
    option: &SelectOption,
    limit: SelectionLimit,
) -> OptionState {
    let selected = current.contains(option.value());
    OptionState {
        selected,
        disabled: !selected && limit.is_reached(current.len()),
    }
}
