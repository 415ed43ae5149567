//! # Deferred Product Queries
//!
//! A [`ProductQuery`] describes a filtered set of products without
//! touching the database. SQL runs only when a terminal method is awaited,
//! so callers can ask for the `count()` before deciding to materialize.
//!
//! ```text
//! find_by_name("Hat") ──► ProductQuery { filter: Name("Hat") }
//!                               │
//!              ┌────────────────┼─────────────────┐
//!              ▼                ▼                 ▼
//!          count()         fetch_all()         first()
//!       SELECT COUNT(*)   SELECT ... ORDER    SELECT ... ORDER
//!                          BY id              BY id LIMIT 1
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::{Category, Price, Product};

use super::{ProductRow, PRODUCT_COLUMNS};
use crate::error::DbResult;

// =============================================================================
// Filter
// =============================================================================

/// Predicate applied by a [`ProductQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Every product.
    All,
    /// Exact, case-sensitive name match.
    Name(String),
    /// `available` equals the flag.
    Available(bool),
    /// `category` equals the tag.
    Category(Category),
    /// `price` equals the normalized price.
    Price(Price),
}

impl ProductFilter {
    fn where_clause(&self) -> &'static str {
        match self {
            ProductFilter::All => "",
            ProductFilter::Name(_) => "WHERE name = ?1",
            ProductFilter::Available(_) => "WHERE available = ?1",
            ProductFilter::Category(_) => "WHERE category = ?1",
            ProductFilter::Price(_) => "WHERE price_cents = ?1",
        }
    }

    /// Evaluates the filter against an in-memory product.
    ///
    /// Agrees with the SQL the filter produces.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Name(name) => product.name == *name,
            ProductFilter::Available(flag) => product.available == *flag,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Price(price) => product.price == *price,
        }
    }
}

/// Binds the filter's single parameter, if any.
macro_rules! bind_filter {
    ($query:expr, $filter:expr) => {{
        let query = $query;
        match $filter {
            ProductFilter::All => query,
            ProductFilter::Name(name) => query.bind(name.as_str()),
            ProductFilter::Available(flag) => query.bind(*flag),
            ProductFilter::Category(category) => query.bind(*category),
            ProductFilter::Price(price) => query.bind(price.cents()),
        }
    }};
}

// =============================================================================
// Query
// =============================================================================

/// A deferred, re-runnable query over the `products` table.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pool: SqlitePool,
    filter: ProductFilter,
}

impl ProductQuery {
    pub(crate) fn new(pool: SqlitePool, filter: ProductFilter) -> Self {
        ProductQuery { pool, filter }
    }

    /// The filter this query applies.
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Counts matching rows without loading them.
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM products {}",
            self.filter.where_clause()
        );

        let count: i64 = bind_filter!(sqlx::query_scalar::<_, i64>(&sql), &self.filter)
            .fetch_one(&self.pool)
            .await?;

        debug!(filter = ?self.filter, count, "Counted products");
        Ok(count)
    }

    /// Loads every matching product, ordered by id.
    pub async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products {} ORDER BY id",
            self.filter.where_clause()
        );

        let rows = bind_filter!(sqlx::query_as::<_, ProductRow>(&sql), &self.filter)
            .fetch_all(&self.pool)
            .await?;

        debug!(filter = ?self.filter, count = rows.len(), "Fetched products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Loads the matching product with the lowest id.
    pub async fn first(&self) -> DbResult<Option<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products {} ORDER BY id LIMIT 1",
            self.filter.where_clause()
        );

        let row = bind_filter!(sqlx::query_as::<_, ProductRow>(&sql), &self.filter)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Whether no product matches.
    pub async fn is_empty(&self) -> DbResult<bool> {
        Ok(self.count().await? == 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
