//! Registration form state and its validation rules
//!
//! | Field     | Rules (first failure wins)                          |
//! |-----------|-----------------------------------------------------|
//! | firstName | 2..=12 UTF-16 units, ASCII letters only             |
//! | lastName  | 2..=12 UTF-16 units, ASCII letters only             |
//! | team      | exactly [`TEAM_SIZE`] entries                       |
//!
//! Validation failures are data, not errors: [`validate`] returns a
//! [`ValidationResult`] listing every failing field.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::value_objects::{SelectionLimit, SelectionSet};

/// Number of creatures a trainer must pick.
pub const TEAM_SIZE: usize = 4;

/// Minimum name length, in UTF-16 code units (the browser's string length).
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum name length, in UTF-16 code units.
pub const NAME_MAX_CHARS: usize = 12;

pub const LETTERS_ONLY_MESSAGE: &str = "Only letters (a-z, A-Z) are allowed";

pub const TEAM_SIZE_MESSAGE: &str = "You must select exactly 4 Pokemon";

static LETTERS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

/// A validated field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Team,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::FirstName, Self::LastName, Self::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values entered on the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub team: SelectionSet,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity the team multi-select is rendered with.
    pub const fn team_limit() -> SelectionLimit {
        SelectionLimit::AtMost(TEAM_SIZE)
    }

    /// "First Last", as shown in the team summary.
    pub fn trainer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Per-field error messages; a missing field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult(BTreeMap<FormField, String>);

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn record(&mut self, field: FormField, message: Option<String>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

/// Evaluate every field independently.
pub fn validate(form: &FormState) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.record(FormField::FirstName, validate_name("First", &form.first_name));
    result.record(FormField::LastName, validate_name("Last", &form.last_name));
    result.record(FormField::Team, validate_team(&form.team));
    result
}

fn validate_name(prefix: &str, value: &str) -> Option<String> {
    let units = value.encode_utf16().count();
    if units < NAME_MIN_CHARS {
        return Some(format!(
            "{} name must be at least {} characters",
            prefix, NAME_MIN_CHARS
        ));
    }
    if units > NAME_MAX_CHARS {
        return Some(format!(
            "{} name must be at most {} characters",
            prefix, NAME_MAX_CHARS
        ));
    }
    if !LETTERS_ONLY.is_match(value) {
        return Some(LETTERS_ONLY_MESSAGE.to_string());
    }
    None
}

fn validate_team(team: &SelectionSet) -> Option<String> {
    (team.len() != TEAM_SIZE).then(|| TEAM_SIZE_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::SelectOption;

    fn team(n: usize) -> SelectionSet {
        (0..n)
            .map(|i| SelectOption::new(format!("mon{i}"), format!("Mon{i}")))
            .collect()
    }

    fn form(first: &str, last: &str, members: usize) -> FormState {
        FormState {
            first_name: first.to_string(),
            last_name: last.to_string(),
            team: team(members),
        }
    }

    mod name_rules {
        use super::*;

        #[test]
        fn one_letter_first_name_reports_min_length_only() {
            let result = validate(&form("A", "Smith", 4));
            assert_eq!(
                result.error(FormField::FirstName),
                Some("First name must be at least 2 characters")
            );
            assert!(!result.has_error(FormField::LastName));
            assert!(!result.has_error(FormField::Team));
            assert_eq!(result.len(), 1);
        }

        #[test]
        fn empty_name_reports_min_length_before_letters() {
            let result = validate(&form("", "Smith", 4));
            assert_eq!(
                result.error(FormField::FirstName),
                Some("First name must be at least 2 characters")
            );
        }

        #[test]
        fn digits_report_letters_only() {
            let result = validate(&form("John123", "Smith", 4));
            assert_eq!(result.error(FormField::FirstName), Some(LETTERS_ONLY_MESSAGE));
        }

        #[test]
        fn long_name_reports_max_length_before_letters() {
            let result = validate(&form("Ash", "Ketchum-Ketchum!", 4));
            assert_eq!(
                result.error(FormField::LastName),
                Some("Last name must be at most 12 characters")
            );
        }

        #[test]
        fn boundary_lengths_are_accepted() {
            assert!(validate(&form("Al", "Abcdefghijkl", 4)).is_valid());
        }

        #[test]
        fn thirteen_letters_rejected() {
            let result = validate(&form("Abcdefghijklm", "Smith", 4));
            assert_eq!(
                result.error(FormField::FirstName),
                Some("First name must be at most 12 characters")
            );
        }

        #[test]
        fn spaces_and_accents_rejected() {
            let result = validate(&form("Jo hn", "Zoë", 4));
            assert_eq!(result.error(FormField::FirstName), Some(LETTERS_ONLY_MESSAGE));
            assert_eq!(result.error(FormField::LastName), Some(LETTERS_ONLY_MESSAGE));
        }

        #[test]
        fn length_counts_utf16_units_not_bytes() {
            // 12 units, 13 bytes: fails the letters rule, not the length rule
            let result = validate(&form("Abcdefghijké", "Smith", 4));
            assert_eq!(result.error(FormField::FirstName), Some(LETTERS_ONLY_MESSAGE));
        }

        #[test]
        fn astral_symbol_counts_as_two_units() {
            // one char, two UTF-16 units: long enough, but not a letter
            let result = validate(&form("😀", "Smith", 4));
            assert_eq!(result.error(FormField::FirstName), Some(LETTERS_ONLY_MESSAGE));
        }
    }

    mod team_rule {
        use super::*;

        #[test]
        fn three_and_five_share_the_same_message() {
            let short = validate(&form("Ash", "Ketchum", 3));
            let long = validate(&form("Ash", "Ketchum", 5));
            assert_eq!(short.error(FormField::Team), Some(TEAM_SIZE_MESSAGE));
            assert_eq!(long.error(FormField::Team), Some(TEAM_SIZE_MESSAGE));
            assert_eq!(short.error(FormField::Team), long.error(FormField::Team));
        }

        #[test]
        fn empty_team_fails() {
            assert!(validate(&form("Ash", "Ketchum", 0)).has_error(FormField::Team));
        }

        #[test]
        fn four_members_pass() {
            assert!(validate(&form("Ash", "Ketchum", 4)).is_valid());
        }
    }

    #[test]
    fn all_fields_evaluated_independently() {
        let result = validate(&FormState::new());
        assert_eq!(result.len(), 3);
        for field in FormField::ALL {
            assert!(result.has_error(field), "{field} should fail");
        }
    }

    #[test]
    fn letters_only_pattern_matches_whole_ascii_words() {
        assert!(LETTERS_ONLY.is_match("Ash"));
        assert!(!LETTERS_ONLY.is_match("Ash1"));
        assert!(!LETTERS_ONLY.is_match("1Ash"));
        assert!(!LETTERS_ONLY.is_match(""));
    }

    #[test]
    fn result_serializes_as_field_map() {
        let json = serde_json::to_value(validate(&form("Ash", "Ketchum", 1))).unwrap();
        assert_eq!(json, serde_json::json!({ "team": TEAM_SIZE_MESSAGE }));
    }

    #[test]
    fn trainer_name_joins_first_and_last() {
        assert_eq!(form("Ash", "Ketchum", 0).trainer_name(), "Ash Ketchum");
    }
}
