//! Product catalog loading from products.toml
//!
//! This module provides functionality to load an initial product catalog
//! from a TOML configuration file. The products defined in products.toml are
//! used to seed the database on first run or when products are missing;
//! seeding never touches stock counters.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire products.toml file
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// List of product entries to seed
    pub products: Vec<ProductSeed>,
}

/// Configuration for a single catalog product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Unique part number
    pub part_no: String,
    /// Free-text description; may be omitted
    #[serde(default)]
    pub description: String,
}

/// Loads the product catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse products.toml: {e}"),
    })
}

/// Loads the product catalog from the default location (./products.toml)
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_catalog() -> Result<Catalog> {
    load_catalog("products.toml")
}
