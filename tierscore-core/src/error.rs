//! Typed errors raised by the classifier's input boundary

use thiserror::Error;

/// Errors produced while turning raw strings into scoring categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("invalid {field} category: {value:?} (expected one of: {expected})")]
    InvalidCategory {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl CategoryError {
    pub(crate) fn invalid(field: &'static str, value: &str, expected: &[&str]) -> Self {
        CategoryError::InvalidCategory {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }

    /// Name of the input field that failed to parse
    pub fn field(&self) -> &'static str {
        match self {
            CategoryError::InvalidCategory { field, .. } => field,
        }
    }
}
