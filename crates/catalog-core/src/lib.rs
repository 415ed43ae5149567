//! # catalog-core: Pure Domain Logic for the Product Catalog
//!
//! This crate defines the Product entity, its price type and its
//! validation rules. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Web layer (elsewhere)                          │   │
//! │  │     GET /products ──► POST /products ──► PUT /products/{id}    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON documents                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │  payload  │  │ validation│  │   │
//! │  │   │  Product  │  │   Price   │  │ serialize │  │   rules   │  │   │
//! │  │   │ Category  │  │ IntoPrice │  │deserialize│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  catalog-db (Database Layer)                    │   │
//! │  │             SQLite queries, migrations, repository              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`price`] - Fixed-point Price type and input normalization
//! - [`payload`] - JSON serialization and validated deserialization
//! - [`validation`] - Field validation rules
//! - [`error`] - DataValidationError
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Product};
//!
//! let hat = Product::new("Fedora", "A red hat", 12.50, true, Category::Cloths).unwrap();
//! assert_eq!(hat.to_string(), "<Product Fedora id=[None]>");
//! assert_eq!(hat.price.to_string(), "12.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod payload;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{DataValidationError, ValidationResult};
pub use price::{IntoPrice, Price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name (characters).
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a product description (characters).
pub const MAX_DESCRIPTION_LEN: usize = 250;
