//! Stock transaction operations - Creating, deleting, and querying transactions.
//!
//! A transaction is submitted with its full set of detail lines and applied
//! atomically: the header insert and every line's stock effect commit
//! together or not at all. Deletion reverses every line through the ledger
//! engine before the rows go away. Read queries cover the lookups the
//! original API exposes: by ID, by code, listings newest-first, and the
//! movement history of a product.

use crate::{
    core::ledger,
    entities::{
        StockTransaction, TransactionDetail, TransactionType, stock_transaction,
        transaction_detail,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashSet;

/// One line of a transaction submission: a product and a quantity to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineInput {
    /// ID of the product this line moves
    pub product_id: i64,
    /// Quantity to move; strictly positive
    pub quantity: i64,
}

/// Creates a stock transaction with its detail lines, atomically.
///
/// Validates the submission (non-empty line set, no product listed twice,
/// unused transaction code), inserts the header, and applies every line in
/// the order supplied. If any line fails — invalid quantity, unknown
/// product, insufficient stock — the header and all prior lines' stock
/// effects are rolled back; no partial transaction is ever observable.
///
/// # Errors
/// Returns an error if:
/// - The transaction code is empty or already in use
/// - The line set is empty or references a product more than once
/// - Any line fails validation or would drive stock negative
/// - The database operation fails
pub async fn create_transaction(
    db: &DatabaseConnection,
    transaction_code: String,
    transaction_type: TransactionType,
    notes: Option<String>,
    lines: Vec<LineInput>,
) -> Result<stock_transaction::Model> {
    let transaction_code = transaction_code.trim().to_string();
    if transaction_code.is_empty() {
        return Err(Error::Config {
            message: "Transaction code cannot be empty".to_string(),
        });
    }

    if lines.is_empty() {
        return Err(Error::EmptyTransaction);
    }

    let mut seen = HashSet::new();
    for line in &lines {
        if !seen.insert(line.product_id) {
            return Err(Error::DuplicateLineProduct {
                product_id: line.product_id,
            });
        }
    }

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    let clash = StockTransaction::find()
        .filter(stock_transaction::Column::TransactionCode.eq(transaction_code.as_str()))
        .one(&txn)
        .await?;
    if clash.is_some() {
        return Err(Error::DuplicateTransactionCode {
            code: transaction_code,
        });
    }

    let header = stock_transaction::ActiveModel {
        transaction_code: Set(transaction_code),
        transaction_type: Set(transaction_type),
        date: Set(chrono::Utc::now()),
        notes: Set(notes),
        ..Default::default()
    };
    let header = header.insert(&txn).await?;

    for line in &lines {
        ledger::apply_line(&txn, &header, line.product_id, line.quantity).await?;
    }

    txn.commit().await?;

    tracing::info!(
        code = %header.transaction_code,
        lines = lines.len(),
        "stock transaction applied"
    );
    Ok(header)
}

/// Deletes a transaction, reversing every detail line's stock effect.
///
/// Reversals, line deletion, and header deletion happen in one database
/// transaction. A reversal that would drive a stock counter negative aborts
/// the whole deletion.
///
/// # Errors
/// Returns an error if:
/// - No transaction matches `transaction_id`
/// - Any reversal would drive a stock counter negative
/// - The database operation fails
pub async fn delete_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let header = StockTransaction::find_by_id(transaction_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::TransactionNotFound {
            reference: transaction_id.to_string(),
        })?;

    let details = TransactionDetail::find()
        .filter(transaction_detail::Column::TransactionId.eq(transaction_id))
        .all(&txn)
        .await?;

    for detail in details {
        ledger::reverse_line(&txn, &header, &detail).await?;
        detail.delete(&txn).await?;
    }

    header.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Retrieves a specific transaction by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<stock_transaction::Model>> {
    StockTransaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific transaction by its code, returning None if not found.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_transaction_by_code(
    db: &DatabaseConnection,
    code: &str,
) -> Result<Option<stock_transaction::Model>> {
    StockTransaction::find()
        .filter(stock_transaction::Column::TransactionCode.eq(code))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all transactions, ordered by date (newest first).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_transactions(
    db: &DatabaseConnection,
) -> Result<Vec<stock_transaction::Model>> {
    StockTransaction::find()
        .order_by_desc(stock_transaction::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a transaction together with its detail lines.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_transaction_with_details(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<(stock_transaction::Model, Vec<transaction_detail::Model>)>> {
    let mut results = StockTransaction::find_by_id(transaction_id)
        .find_with_related(TransactionDetail)
        .all(db)
        .await?;
    Ok(results.pop())
}

/// Retrieves the detail lines of a transaction.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_details_for_transaction(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Vec<transaction_detail::Model>> {
    TransactionDetail::find()
        .filter(transaction_detail::Column::TransactionId.eq(transaction_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every detail line referencing a product, across all
/// transactions - the product's movement history.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_movements_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<transaction_detail::Model>> {
    TransactionDetail::find()
        .filter(transaction_detail::Column::ProductId.eq(product_id))
        .all(db)
        .await
        .map_err(Into::into)
}
