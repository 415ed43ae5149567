//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Caller                                                                │
//! │       │                                                                 │
//! │       │  db.products().find_by_category(Category::Tools)               │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&mut product)      → assigns id                            │
//! │  ├── update(&product)          → requires id + name                    │
//! │  ├── delete(&product)                                                  │
//! │  ├── all() / find(id)                                                  │
//! │  └── find_by_{name,availability,category,price}                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductQuery (deferred)                                               │
//! │  ├── count()     → SELECT COUNT(*) ... WHERE <filter>                  │
//! │  └── fetch_all() → SELECT ...      ... WHERE <filter> ORDER BY id      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Types
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and finders
//! - [`ProductQuery`](query::ProductQuery) - Deferred, countable result set

pub mod product;
pub mod query;

use catalog_core::{Category, Price, Product};

/// Column list shared by every product SELECT.
pub(crate) const PRODUCT_COLUMNS: &str =
    "id, name, description, price_cents, available, category";

/// A row of the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub available: bool,
    pub category: Category,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price: Price::from_cents(row.price_cents),
            available: row.available,
            category: row.category,
        }
    }
}
