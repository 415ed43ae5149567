//! # Error Types
//!
//! Domain error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── DataValidationError  - Invalid or incomplete entity state          │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError              - Database operation failures                 │
//! │                                                                         │
//! │  Flow: DataValidationError → DbError::Validation → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Data Validation Error
// =============================================================================

/// Raised on invalid or incomplete Product state.
///
/// ## When This Occurs
/// - `update()` on a product that was never persisted (no id)
/// - `update()` with an empty name
/// - Deserializing a document with missing keys, wrong types, or an
///   unrecognized category tag
/// - A price that cannot be parsed or does not fit the column
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    /// The operation needs a persisted product but `id` is `None`.
    #[error("Update called with empty ID field")]
    MissingId,

    /// A required field is missing or empty.
    #[error("Invalid product: missing {field}")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field has the wrong JSON type.
    #[error("Invalid type for {expected} [{field}]")]
    InvalidType { field: String, expected: String },

    /// Price could not be parsed or is out of range.
    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    /// Category tag is not one of the known variants.
    #[error("Invalid attribute: {0}")]
    UnknownCategory(String),

    /// The document is not an object or contains no data.
    #[error("Invalid product: body of request contained bad or no data {0}")]
    InvalidBody(String),
}

impl DataValidationError {
    /// Creates a Required error for a given field.
    pub fn required(field: impl Into<String>) -> Self {
        DataValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidType error.
    pub fn invalid_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        DataValidationError::InvalidType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Creates an InvalidPrice error.
    pub fn invalid_price(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DataValidationError::InvalidPrice {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, DataValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DataValidationError::MissingId.to_string(),
            "Update called with empty ID field"
        );
        assert_eq!(
            DataValidationError::required("name").to_string(),
            "Invalid product: missing name"
        );
        assert_eq!(
            DataValidationError::invalid_type("available", "boolean").to_string(),
            "Invalid type for boolean [available]"
        );
    }

    #[test]
    fn test_unknown_category_message() {
        let err = DataValidationError::UnknownCategory("JEWELRY".to_string());
        assert_eq!(err.to_string(), "Invalid attribute: JEWELRY");
    }
}
