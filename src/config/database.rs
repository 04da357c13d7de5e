//! Database configuration module for stockroom.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Schema comes straight from the entity definitions via
//! `Schema::create_table_from_entity`, so the database always matches the
//! Rust structs without hand-written SQL. The one statement the entity
//! derives cannot express - the composite unique index that allows a product
//! to appear at most once per transaction - is created here as well.

use crate::entities::{Product, StockTransaction, TransactionDetail, transaction_detail};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/stockroom.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local `SQLite` file.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Creates the products, stock transactions, and transaction details tables,
/// then the unique index on `(transaction_id, product_id)`.
///
/// # Errors
/// Returns an error if any DDL statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    use sea_orm::sea_query::Index;

    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let product_table = schema.create_table_from_entity(Product);
    let transaction_table = schema.create_table_from_entity(StockTransaction);
    let detail_table = schema.create_table_from_entity(TransactionDetail);

    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;
    db.execute(builder.build(&detail_table)).await?;

    // At most one line per (transaction, product)
    let detail_unique = Index::create()
        .name("idx_transaction_details_transaction_product")
        .table(TransactionDetail)
        .col(transaction_detail::Column::TransactionId)
        .col(transaction_detail::Column::ProductId)
        .unique()
        .to_owned();
    db.execute(builder.build(&detail_unique)).await?;

    Ok(())
}
