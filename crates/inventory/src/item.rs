//! Item names and quantity arguments.
//!
//! Operations accept loosely-typed arguments (`serde_json::Value`) at the edge,
//! so the narrow typing policy lives here: an item is text, a quantity is an
//! integer. Nothing is coerced; `"10"` and `10.0` are rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use stockroom_core::{DomainError, DomainResult};

/// A non-empty item name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyItemName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Require `value` to be text. Empty text passes; emptiness is checked separately.
pub fn text_arg(value: &Value) -> DomainResult<&str> {
    value
        .as_str()
        .ok_or_else(|| DomainError::validation(format!("item must be text, got {value}")))
}

/// Require `value` to be an integer that fits in an `i64`.
pub fn quantity_arg(value: &Value) -> DomainResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| DomainError::validation(format!("qty must be int, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(ItemName::new(""), Err(DomainError::EmptyItemName));
        assert_eq!(ItemName::new("apple").unwrap().as_str(), "apple");
    }

    #[test]
    fn whitespace_name_is_kept_as_is() {
        assert_eq!(ItemName::new(" ").unwrap().as_str(), " ");
    }

    #[test]
    fn text_arg_rejects_non_strings() {
        assert_eq!(text_arg(&json!("apple")).unwrap(), "apple");
        assert!(matches!(text_arg(&json!(123)), Err(DomainError::Validation(_))));
        assert!(matches!(text_arg(&json!(null)), Err(DomainError::Validation(_))));
    }

    #[test]
    fn quantity_arg_does_not_coerce() {
        assert_eq!(quantity_arg(&json!(10)).unwrap(), 10);
        assert_eq!(quantity_arg(&json!(-3)).unwrap(), -3);
        for bad in [json!("ten"), json!("10"), json!(10.0), json!(true), json!(null)] {
            assert!(
                matches!(quantity_arg(&bad), Err(DomainError::Validation(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn quantity_arg_rejects_values_beyond_i64() {
        assert!(quantity_arg(&json!(u64::MAX)).is_err());
    }
}
