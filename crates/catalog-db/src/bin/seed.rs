//! # Seed Data Generator
//!
//! Populates the database with generated products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products (default) into $DATABASE_URI
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 1000
//!
//! # Specify the database
//! cargo run -p catalog-db --bin seed -- --db sqlite://./data/catalog.db?mode=rwc
//!
//! # Start from an empty table
//! cargo run -p catalog-db --bin seed -- --reset
//! ```

use std::env;

use catalog_core::Category;
use catalog_db::fixtures::ProductFactory;
use catalog_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 100;
    let mut seed: u64 = 0x5EED;
    let mut reset = false;
    let mut config = DbConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    count = value.parse()?;
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if let Some(value) = args.get(i + 1) {
                    seed = value.parse()?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if let Some(value) = args.get(i + 1) {
                    config = DbConfig::new(value.clone());
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 100)");
                println!("  -s, --seed <N>     Generator seed (default: 24301)");
                println!("  -d, --db <URL>     Connection string (default: $DATABASE_URI)");
                println!("      --reset        Delete existing products first");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    info!(url = %config.database_url, count, "Seeding products");

    let db = Database::new(config).await?;
    let products = db.products();

    if reset {
        let deleted = products.delete_all().await?;
        info!(deleted, "Removed existing products");
    }

    let existing = products.count().await?;
    if existing > 0 {
        warn!(existing, "Database already has products, appending");
    }

    let start = std::time::Instant::now();
    let mut factory = ProductFactory::with_seed(seed);
    let mut created = 0usize;

    for mut product in factory.build_batch(count) {
        match products.create(&mut product).await {
            Ok(_) => created += 1,
            Err(e) => warn!(product = %product, error = %e, "Failed to insert product"),
        }
    }

    info!(created, elapsed = ?start.elapsed(), "Products generated");

    for category in Category::ALL {
        let n = products.find_by_category(category).count().await?;
        info!(%category, count = n, "Category summary");
    }

    let available = products.find_by_availability(true).count().await?;
    info!(available, total = products.count().await?, "Seed complete");

    db.close().await;
    Ok(())
}
