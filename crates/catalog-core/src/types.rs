//! # Domain Types
//!
//! Core domain types of the product catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │      Category       │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (Option<i64>)   │        │  Unknown            │                │
//! │  │  name               │───────►│  Cloths             │                │
//! │  │  description        │        │  Food               │                │
//! │  │  price (Price)      │        │  Housewares         │                │
//! │  │  available          │        │  Automotive         │                │
//! │  │  category           │        │  Tools              │                │
//! │  └─────────────────────┘        └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is `None` until the repository inserts the product; the store
//! assigns it and it never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DataValidationError, ValidationResult};
use crate::price::{IntoPrice, Price};

// =============================================================================
// Category
// =============================================================================

/// Closed set of product classification tags.
///
/// The text form is the upper-case tag (`"CLOTHS"`), both in JSON
/// documents and in the `category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Returns the upper-case tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    /// Exact match on the tag; `"cloths"` is not `CLOTHS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DataValidationError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item.
///
/// JSON conversion goes through [`Product::serialize`] and
/// [`Product::deserialize`] (see `payload.rs`) so input is always validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Storage-assigned identifier, `None` until created.
    pub id: Option<i64>,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price, two fractional digits.
    pub price: Price,

    /// Whether the product can currently be ordered.
    pub available: bool,

    /// Classification tag.
    pub category: Category,
}

impl Product {
    /// Creates an unsaved product.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Category, Product};
    ///
    /// let p = Product::new("Hammer", "Claw hammer", "24.99", true, Category::Tools).unwrap();
    /// assert_eq!(p.id, None);
    /// assert_eq!(p.price.cents(), 2499);
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl IntoPrice,
        available: bool,
        category: Category,
    ) -> ValidationResult<Self> {
        Ok(Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price: price.into_price()?,
            available,
            category,
        })
    }

    /// Whether the product has been written to storage.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for Product {
    fn default() -> Self {
        Product {
            id: None,
            name: String::new(),
            description: String::new(),
            price: Price::zero(),
            available: true,
            category: Category::Unknown,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_a_product() {
        let product =
            Product::new("Fedora", "A red hat", 12.50, true, Category::Cloths).unwrap();

        assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
        assert_eq!(product.id, None);
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description, "A red hat");
        assert!(product.available);
        assert_eq!(product.price, 12.50);
        assert_eq!(product.category, Category::Cloths);
        assert!(!product.is_persisted());
    }

    #[test]
    fn test_display_with_id() {
        let mut product = Product::new("Pots", "Copper", "40", false, Category::Housewares).unwrap();
        product.id = Some(7);
        assert_eq!(product.to_string(), "<Product Pots id=[7]>");
    }

    #[test]
    fn test_new_rejects_bad_price() {
        let err = Product::new("Hat", "", "abc", true, Category::Cloths).unwrap_err();
        assert!(matches!(err, DataValidationError::InvalidPrice { .. }));
    }

    #[test]
    fn test_category_round_trip_through_text() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_rejects_unknown_tag() {
        assert_eq!(
            "cloths".parse::<Category>(),
            Err(DataValidationError::UnknownCategory("cloths".to_string()))
        );
        assert!("JEWELRY".parse::<Category>().is_err());
    }

    #[test]
    fn test_defaults() {
        let product = Product::default();
        assert!(product.available);
        assert_eq!(product.category, Category::Unknown);
        assert_eq!(product.price, Price::zero());
    }
}
