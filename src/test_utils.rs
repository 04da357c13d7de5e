//! Shared test utilities for stockroom.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{product, transaction},
    entities::{self, TransactionType},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with a default description and zero stock.
pub async fn create_test_product(
    db: &DatabaseConnection,
    part_no: &str,
) -> Result<entities::product::Model> {
    product::create_product(db, part_no.to_string(), "Test product".to_string()).await
}

/// Sets up a complete test environment with one product ("P-100").
/// Returns (db, product) for common test scenarios.
pub async fn setup_with_product() -> Result<(DatabaseConnection, entities::product::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "P-100").await?;
    Ok((db, product))
}

/// Creates a single-line IN transaction (goods receipt).
pub async fn receive_stock(
    db: &DatabaseConnection,
    code: &str,
    product_id: i64,
    quantity: i64,
) -> Result<entities::stock_transaction::Model> {
    transaction::create_transaction(
        db,
        code.to_string(),
        TransactionType::In,
        None,
        vec![transaction::LineInput {
            product_id,
            quantity,
        }],
    )
    .await
}

/// Creates a single-line OUT transaction (dispatch).
pub async fn issue_stock(
    db: &DatabaseConnection,
    code: &str,
    product_id: i64,
    quantity: i64,
) -> Result<entities::stock_transaction::Model> {
    transaction::create_transaction(
        db,
        code.to_string(),
        TransactionType::Out,
        None,
        vec![transaction::LineInput {
            product_id,
            quantity,
        }],
    )
    .await
}

/// Reads a product's current stock counter.
pub async fn stock_of(db: &DatabaseConnection, product_id: i64) -> Result<i64> {
    let product = product::get_product_by_id(db, product_id)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            reference: product_id.to_string(),
        })?;
    Ok(product.current_stock)
}

/// Returns all detail lines of the transaction with the given code.
pub async fn lines_of(
    db: &DatabaseConnection,
    code: &str,
) -> Result<Vec<entities::transaction_detail::Model>> {
    let header = transaction::get_transaction_by_code(db, code)
        .await?
        .ok_or_else(|| Error::TransactionNotFound {
            reference: code.to_string(),
        })?;
    transaction::get_details_for_transaction(db, header.id).await
}

/// Returns the single detail line of the transaction with the given code.
/// Fails if the transaction does not have exactly one line.
pub async fn single_line_of(
    db: &DatabaseConnection,
    code: &str,
) -> Result<entities::transaction_detail::Model> {
    let mut lines = lines_of(db, code).await?;
    if lines.len() != 1 {
        return Err(Error::Config {
            message: format!("expected exactly one line on '{code}', got {}", lines.len()),
        });
    }
    Ok(lines.remove(0))
}
