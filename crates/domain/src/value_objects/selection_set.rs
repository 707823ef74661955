//! Ordered, duplicate-free selection

use serde::{Deserialize, Serialize};

use super::{SelectOption, SelectionLimit};

/// The user's current picks.
///
/// Insertion order is the display and report order. Two entries never share
/// the same `value`; construction from a list keeps the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SelectOption>", into = "Vec<SelectOption>")]
pub struct SelectionSet(Vec<SelectOption>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an entry with this key is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|o| o.value() == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.0
    }

    /// Keys of the selected entries, in selection order.
    pub fn values(&self) -> Vec<&str> {
        self.0.iter().map(SelectOption::value).collect()
    }

    /// Footer text for a finite limit, e.g. `"Selected 2 of 4"`.
    pub fn counter_label(&self, limit: SelectionLimit) -> Option<String> {
        limit
            .max()
            .map(|max| format!("Selected {} of {}", self.len(), max))
    }

    /// Append without capacity checks. Duplicate keys are ignored.
    pub(crate) fn push(&mut self, option: SelectOption) {
        if !self.contains(option.value()) {
            self.0.push(option);
        }
    }

    /// Drop the entry with this key. Returns whether anything was removed.
    pub(crate) fn remove_value(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|o| o.value() != value);
        self.0.len() != before
    }
}

impl From<Vec<SelectOption>> for SelectionSet {
    fn from(options: Vec<SelectOption>) -> Self {
        options.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<SelectOption> {
    fn from(set: SelectionSet) -> Self {
        set.0
    }
}

impl FromIterator<SelectOption> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        let mut set = Self::new();
        for option in iter {
            set.push(option);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(value: &str) -> SelectOption {
        SelectOption::new(value, value.to_uppercase())
    }

    #[test]
    fn collecting_keeps_first_occurrence_of_each_key() {
        let set: SelectionSet = vec![opt("a"), opt("b"), SelectOption::new("a", "Other")]
            .into_iter()
            .collect();
        assert_eq!(set.values(), vec!["a", "b"]);
        assert_eq!(set.as_slice()[0].label(), "A");
    }

    #[test]
    fn deserializing_drops_duplicate_keys() {
        let json = serde_json::json!([
            { "value": "a", "label": "A" },
            { "value": "a", "label": "A again" },
        ]);
        let set: SelectionSet = serde_json::from_value(json).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn counter_label_only_for_finite_limit() {
        let set = SelectionSet::from(vec![opt("a"), opt("b")]);
        assert_eq!(
            set.counter_label(SelectionLimit::AtMost(4)).as_deref(),
            Some("Selected 2 of 4")
        );
        assert_eq!(set.counter_label(SelectionLimit::Unbounded), None);
    }

    #[test]
    fn remove_value_reports_whether_it_removed() {
        let mut set = SelectionSet::from(vec![opt("a")]);
        assert!(!set.remove_value("z"));
        assert!(set.remove_value("a"));
        assert!(set.is_empty());
    }
}
