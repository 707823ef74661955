//! A single selectable entry of the multi-select

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// One selectable catalog entry as consumed by the selection engine.
///
/// `value` is the unique key, `label` the display text. Options are built
/// once from catalog data and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    value: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl SelectOption {
    /// Create an option without artwork.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            image: None,
        }
    }

    /// Create an option whose key must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is empty after trimming.
    pub fn try_new(value: impl Into<String>, label: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Option value cannot be empty"));
        }
        Ok(Self::new(value, label))
    }

    /// Attach an image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Unique key of the option.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Display name of the option.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional artwork URL.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_value_label_and_image() {
        let option = SelectOption::new("pikachu", "Pikachu").with_image("https://img/25.png");
        assert_eq!(option.value(), "pikachu");
        assert_eq!(option.label(), "Pikachu");
        assert_eq!(option.image(), Some("https://img/25.png"));
        assert_eq!(option.to_string(), "Pikachu");
    }

    #[test]
    fn try_new_rejects_blank_value() {
        let err = SelectOption::try_new("  ", "Nothing").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn image_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(SelectOption::new("eevee", "Eevee")).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "eevee", "label": "Eevee" }));
    }
}
