//! Operational entry point: initializes the database, seeds the product
//! catalog when one is present, and logs the current inventory snapshot.

use dotenvy::dotenv;
use stockroom::{config, core, errors::Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Initialize database
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    // 4. Seed the product catalog if a products.toml is present
    if std::path::Path::new("products.toml").exists() {
        let catalog = config::catalog::load_default_catalog()?;
        let inserted = core::product::seed_products(&db, &catalog.products).await?;
        info!(inserted, "Product catalog seeded.");
    }

    // 5. Log the inventory snapshot
    for product in core::product::get_inventory_snapshot(&db).await? {
        info!(
            part_no = %product.part_no,
            stock = product.current_stock,
            "inventory"
        );
    }

    Ok(())
}
