//! # Product Fixtures
//!
//! Deterministic generator of realistic products for tests and seeding.
//!
//! ## Generated Products
//! - Name picked from a short list, so batches contain duplicate names
//! - Description built from a size and a material
//! - Price between $0.50 and $2000.00
//! - Availability and category spread across every value
//!
//! The same seed always yields the same sequence, so a failing test can
//! be reproduced exactly.

use catalog_core::{Category, Price, Product};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Names shared by generated products.
const NAMES: &[&str] = &[
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

const SIZES: &[&str] = &["Small", "Medium", "Large", "Family size", "Travel"];

const MATERIALS: &[&str] = &["cotton", "steel", "organic", "ceramic", "leather", "plastic"];

/// Lowest generated price, in cents.
const MIN_PRICE_CENTS: i64 = 50;

/// Highest generated price, in cents.
const MAX_PRICE_CENTS: i64 = 200_000;

const DEFAULT_SEED: u64 = 0x5EED;

/// Generator of unsaved products.
///
/// ## Usage
/// ```rust
/// use catalog_db::fixtures::ProductFactory;
///
/// let mut factory = ProductFactory::new();
/// let batch = factory.build_batch(5);
/// assert_eq!(batch.len(), 5);
/// assert!(batch.iter().all(|p| p.id.is_none()));
/// ```
#[derive(Debug, Clone)]
pub struct ProductFactory {
    rng: StdRng,
}

impl ProductFactory {
    /// Creates a factory with the default seed.
    pub fn new() -> Self {
        ProductFactory::with_seed(DEFAULT_SEED)
    }

    /// Creates a factory with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        ProductFactory {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds one product.
    pub fn build(&mut self) -> Product {
        let name = self.pick(NAMES);
        let size = self.pick(SIZES);
        let material = self.pick(MATERIALS);

        let cents = self.rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
        let available = self.rng.gen_bool(0.5);
        let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];

        Product {
            id: None,
            name: name.to_string(),
            description: format!("{size} {material} {}", name.to_lowercase()),
            price: Price::from_cents(cents),
            available,
            category,
        }
    }

    /// Builds `count` products.
    pub fn build_batch(&mut self, count: usize) -> Vec<Product> {
        (0..count).map(|_| self.build()).collect()
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or("Product")
    }
}

impl Default for ProductFactory {
    fn default() -> Self {
        ProductFactory::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_products() {
        let a = ProductFactory::with_seed(7).build_batch(10);
        let b = ProductFactory::with_seed(7).build_batch(10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_products_are_valid() {
        let mut factory = ProductFactory::new();
        for product in factory.build_batch(200) {
            assert!(product.validate().is_ok(), "{product}");
            assert!(product.price.cents() >= 50);
            assert!(product.price.cents() <= 200_000);
            assert_eq!(product.id, None);
        }
    }

    #[test]
    fn test_batches_cover_every_category() {
        let batch = ProductFactory::new().build_batch(200);
        for category in Category::ALL {
            assert!(batch.iter().any(|p| p.category == category));
        }
        assert!(batch.iter().any(|p| p.available));
        assert!(batch.iter().any(|p| !p.available));
    }
}
