//! Unified error types for the domain layer
//!
//! Validation failures of the registration form are *not* errors: they are
//! plain data in [`crate::ValidationResult`]. This type covers the remaining
//! contract failures (blank option keys and unparsable catalog references).

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for input that doesn't match the expected
    /// format (e.g. a catalog reference URL without an id segment).
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
