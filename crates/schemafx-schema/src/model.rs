//! # Validation Data Model
//!
//! The two records exchanged between a validator and the test helpers.
//! Both serialize to exactly their named fields so that deep equality over
//! JSON values matches structural equality of the Rust types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single failed constraint: which property, and why.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted path of the offending property (`""` for the document root).
    pub property: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ValidationError {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.property, self.message)
        }
    }
}

/// Outcome of validating one instance against one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from a list of errors; valid iff the list is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_serializes_to_two_fields() {
        let err = ValidationError::new("name", "is missing and it is required");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "property": "name", "message": "is missing and it is required" })
        );
    }

    #[test]
    fn success_serializes_like_a_clean_result() {
        assert_eq!(
            serde_json::to_value(ValidationResult::success()).unwrap(),
            json!({ "valid": true, "errors": [] })
        );
    }

    #[test]
    fn from_errors_sets_validity() {
        assert!(ValidationResult::from_errors(vec![]).valid);
        let res = ValidationResult::from_errors(vec![ValidationError::new("a", "bad")]);
        assert!(!res.valid);
        assert_eq!(res.errors.len(), 1);
    }

    #[test]
    fn display_root_and_nested() {
        assert_eq!(ValidationError::new("", "x").to_string(), "(root): x");
        assert_eq!(ValidationError::new("nic.mac", "x").to_string(), "nic.mac: x");
    }
}
