//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD: create, update, delete
//! - Lookups: all, find by id
//! - Finders returning deferred [`ProductQuery`] values
//!
//! ## Product Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Lifecycle                                    │
//! │                                                                         │
//! │  Product::new(..)          id = None       (in memory only)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.create(&mut p)       id = Some(n)    INSERT, row count +1        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.update(&p)  (0..n)   id unchanged    UPDATE ... WHERE id = n     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.delete(&p)           value remains   DELETE ... WHERE id = n     │
//! │                            in memory, row is gone                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::validation::validate_id;
use catalog_core::{Category, IntoPrice, Product};

use super::query::{ProductFilter, ProductQuery};
use super::{ProductRow, PRODUCT_COLUMNS};
use crate::error::{DbError, DbResult};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let mut hat = Product::new("Fedora", "A red hat", 12.50, true, Category::Cloths)?;
/// let id = repo.create(&mut hat).await?;
///
/// let found = repo.find(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Inserts the product as a new row and assigns its id.
    ///
    /// Any id already on the product is discarded: create always inserts.
    ///
    /// ## Returns
    /// * `Ok(id)` - The generated id, also stored in `product.id`
    /// * `Err(DbError::Validation)` - Name empty or a field too long
    pub async fn create(&self, product: &mut Product) -> DbResult<i64> {
        debug!(name = %product.name, "Creating product");

        product.validate()?;
        product.id = None;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price_cents, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.cents())
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        product.id = Some(id);

        debug!(id, "Product created");
        Ok(id)
    }

    /// Writes every field of the product to its row.
    ///
    /// ## Returns
    /// * `Ok(())` - Row updated (also when nothing changed)
    /// * `Err(DbError::Validation)` - `id` is `None` or `name` is empty
    /// * `Err(DbError::NotFound)` - No row has this id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = ?product.id, name = %product.name, "Updating product");

        let id = product.validate_for_update()?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price_cents = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.cents())
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Removes the product's row.
    ///
    /// Deleting a row that is already gone is a no-op. The in-memory
    /// product keeps its id.
    ///
    /// ## Returns
    /// * `Err(DbError::Validation)` - The product was never persisted
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let id = validate_id(product.id)?;
        debug!(id, name = %product.name, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Delete matched no row");
        }

        Ok(())
    }

    /// Removes every product. Returns the number of rows deleted.
    ///
    /// Used to reset the store between test cases.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(deleted = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns every product, ordered by id.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        debug!("Listing all products");
        self.query(ProductFilter::All).fetch_all().await
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Finding product");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Products whose name equals `name` exactly.
    pub fn find_by_name(&self, name: impl Into<String>) -> ProductQuery {
        let name = name.into();
        debug!(name = %name, "Finding products by name");
        self.query(ProductFilter::Name(name))
    }

    /// Products whose availability equals `available`.
    pub fn find_by_availability(&self, available: bool) -> ProductQuery {
        debug!(available, "Finding products by availability");
        self.query(ProductFilter::Available(available))
    }

    /// Products in `category`.
    pub fn find_by_category(&self, category: Category) -> ProductQuery {
        debug!(%category, "Finding products by category");
        self.query(ProductFilter::Category(category))
    }

    /// Products priced at `price`.
    ///
    /// Accepts any [`IntoPrice`] input (`Price`, `Decimal`, `f64`, `"12.50"`)
    /// and normalizes it before comparing.
    ///
    /// ## Returns
    /// * `Err(DbError::Validation)` - `price` is not a valid price
    pub fn find_by_price(&self, price: impl IntoPrice) -> DbResult<ProductQuery> {
        let price = price.into_price()?;
        debug!(%price, "Finding products by price");
        Ok(self.query(ProductFilter::Price(price)))
    }

    /// Builds a deferred query for an arbitrary filter.
    pub fn query(&self, filter: ProductFilter) -> ProductQuery {
        ProductQuery::new(self.pool.clone(), filter)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        self.query(ProductFilter::All).count().await
    }
}
