//! # Validation Module
//!
//! Field validation for products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (payload.rs)                                 │
//! │  ├── Required keys present                                             │
//! │  ├── JSON types match                                                  │
//! │  └── Category tag and price parse                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, run by the repository before writing            │
//! │  ├── Name present and within length                                    │
//! │  ├── Description within length                                         │
//! │  └── Id present (update only)                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK on category tags                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_name, validate_id};
//!
//! assert!(validate_name("Fedora").is_ok());
//! assert!(validate_id(None).is_err());
//! ```

use crate::error::{DataValidationError, ValidationResult};
use crate::types::Product;
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(DataValidationError::required("name"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(DataValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DataValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates that a product has been persisted.
pub fn validate_id(id: Option<i64>) -> ValidationResult<i64> {
    id.ok_or(DataValidationError::MissingId)
}

// =============================================================================
// Product Validation
// =============================================================================

impl Product {
    /// Checks the fields that every write needs.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        Ok(())
    }

    /// Checks an update: the id first, then the fields.
    ///
    /// Returns the id so callers don't unwrap it again.
    pub fn validate_for_update(&self) -> ValidationResult<i64> {
        let id = validate_id(self.id)?;
        self.validate()?;
        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn hat() -> Product {
        Product::new("Fedora", "A red hat", 12.50, true, Category::Cloths).unwrap()
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Fedora").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(100)).is_ok());
        assert!(validate_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(250)).is_ok());
        assert!(validate_description(&"d".repeat(251)).is_err());
    }

    #[test]
    fn test_update_requires_id() {
        let product = hat();
        assert_eq!(
            product.validate_for_update(),
            Err(DataValidationError::MissingId)
        );
    }

    #[test]
    fn test_update_requires_name() {
        let mut product = hat();
        product.id = Some(1);
        product.name = String::new();
        assert_eq!(
            product.validate_for_update(),
            Err(DataValidationError::required("name"))
        );
    }

    #[test]
    fn test_update_returns_id() {
        let mut product = hat();
        product.id = Some(42);
        assert_eq!(product.validate_for_update(), Ok(42));
    }
}
