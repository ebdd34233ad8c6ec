//! Unified error types for the domain layer
//!
//! Formulas are total and never fail; errors only arise when strings from the
//! outside world are parsed into closed vocabularies (ranks, proficiency
//! levels, rule policies, ids).

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for range or consistency violations.
    ///
    /// Only raised by the optional strict range policy; the formulas
    /// themselves accept any integer.
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=20).contains(&body) {
    ///     return Err(DomainError::validation("body must be within 1..=20"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format:
    /// - Unknown rank tier or proficiency names
    /// - Unknown hit-point policy versions
    /// - Malformed identifiers
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("body must be within 1..=20");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: body must be within 1..=20"
        );
    }

    #[test]
    fn test_invalid_id_error() {
        let err = DomainError::invalid_id("abc");
        assert_eq!(err.to_string(), "Invalid ID format: abc");
    }
}
