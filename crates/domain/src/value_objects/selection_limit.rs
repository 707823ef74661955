//! Capacity bound of a selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of entries a [`super::SelectionSet`] may hold.
///
/// An explicit optional bound: `Unbounded` is the default and never compares
/// against a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionLimit {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl SelectionLimit {
    /// The finite bound, if any.
    pub fn max(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::AtMost(max) => Some(max),
        }
    }

    /// Whether a selection of `len` entries may grow by one.
    pub fn admits_another(self, len: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::AtMost(max) => len < max,
        }
    }

    /// Whether a selection of `len` entries is at (or beyond) capacity.
    pub fn is_reached(self, len: usize) -> bool {
        !self.admits_another(len)
    }
}

impl From<Option<usize>> for SelectionLimit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Self::Unbounded, Self::AtMost)
    }
}

impl fmt::Display for SelectionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::AtMost(max) => write!(f, "at most {}", max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(SelectionLimit::default(), SelectionLimit::Unbounded);
        assert_eq!(SelectionLimit::default().max(), None);
    }

    #[test]
    fn unbounded_always_admits_another() {
        assert!(SelectionLimit::Unbounded.admits_another(0));
        assert!(SelectionLimit::Unbounded.admits_another(usize::MAX));
    }

    #[test]
    fn at_most_admits_until_bound() {
        let limit = SelectionLimit::AtMost(4);
        assert!(limit.admits_another(3));
        assert!(limit.is_reached(4));
        assert!(limit.is_reached(5));
    }

    #[test]
    fn at_most_zero_admits_nothing() {
        assert!(SelectionLimit::AtMost(0).is_reached(0));
    }

    #[test]
    fn converts_from_optional_bound() {
        assert_eq!(SelectionLimit::from(Some(4)), SelectionLimit::AtMost(4));
        assert_eq!(SelectionLimit::from(None), SelectionLimit::Unbounded);
    }
}
