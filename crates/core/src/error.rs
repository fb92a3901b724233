//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing stock). Storage concerns belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument had the wrong type (e.g. a quantity that is not an integer).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The item name was empty.
    #[error("no item specified")]
    EmptyItemName,

    /// The item is not in stock.
    #[error("item {0} not in stock")]
    NotFound(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    /// Whether the failure is a caller mistake worth only a warning.
    ///
    /// Type and invariant failures are reported as errors; an empty name or a
    /// missing item is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyItemName | Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_empty_name_and_missing_item() {
        assert!(DomainError::EmptyItemName.is_warning());
        assert!(DomainError::not_found("orange").is_warning());
        assert!(!DomainError::validation("qty must be int").is_warning());
        assert!(!DomainError::invariant("overflow").is_warning());
    }

    #[test]
    fn messages_name_the_item() {
        assert_eq!(
            DomainError::not_found("orange").to_string(),
            "item orange not in stock"
        );
    }
}
