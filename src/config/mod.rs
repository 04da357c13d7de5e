/// Product catalog seeding from products.toml
pub mod catalog;

/// Database configuration and connection management
pub mod database;
