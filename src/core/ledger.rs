//! Stock ledger engine - The sole authority for mutating product stock.
//!
//! Every change to a product's `current_stock` happens here, as an explicit,
//! named operation: applying a detail line, reversing one, or the
//! replace/remove operations built from those two primitives. Each public
//! operation opens its own database transaction and commits only when every
//! step succeeded; any failure rolls the whole unit back, so stock counters
//! and detail rows never diverge.
//!
//! A line is only ever edited by reversing its previous effect and applying
//! the new one. There is no direct delta-diff path; reversal-then-reapply
//! keeps each step independently checkable against the stock invariant.

use crate::{
    core::product::adjust_stock,
    entities::{
        StockTransaction, TransactionDetail, TransactionType, stock_transaction,
        transaction_detail,
    },
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};

/// Signed stock delta of a detail line: positive for IN, negative for OUT.
pub(crate) const fn line_delta(transaction_type: TransactionType, quantity: i64) -> i64 {
    match transaction_type {
        TransactionType::In => quantity,
        TransactionType::Out => -quantity,
    }
}

/// Applies a new detail line inside the caller's atomic unit.
///
/// Validates the quantity, adjusts the product's stock by the signed delta
/// (an OUT movement exceeding the available stock is rejected before
/// anything is written), and persists the line. The caller owns the
/// enclosing transaction; nothing is visible until it commits.
pub(crate) async fn apply_line<C>(
    db: &C,
    header: &stock_transaction::Model,
    product_id: i64,
    quantity: i64,
) -> Result<transaction_detail::Model>
where
    C: ConnectionTrait,
{
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    adjust_stock(db, product_id, line_delta(header.transaction_type, quantity)).await?;

    let detail = transaction_detail::ActiveModel {
        transaction_id: Set(header.id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        ..Default::default()
    };
    detail.insert(db).await.map_err(Into::into)
}

/// Reverses a previously applied line's stock effect inside the caller's
/// atomic unit.
///
/// The inverse delta goes through the same guard as any other adjustment:
/// reversing an IN line whose goods were already issued would drive the
/// counter negative and is rejected.
pub(crate) async fn reverse_line<C>(
    db: &C,
    header: &stock_transaction::Model,
    detail: &transaction_detail::Model,
) -> Result<()>
where
    C: ConnectionTrait,
{
    adjust_stock(
        db,
        detail.product_id,
        -line_delta(header.transaction_type, detail.quantity),
    )
    .await?;
    Ok(())
}

/// Replaces a detail line's product and/or quantity.
///
/// The old effect is reversed against the old product and the new effect is
/// validated and applied against the (possibly different) new product, both
/// inside one database transaction. If the re-apply fails — insufficient
/// stock, unknown product — the reversal is rolled back with it; the
/// replace is atomic, never sequential-with-partial-commit.
///
/// # Errors
/// Returns an error if:
/// - No detail line matches `line_id`
/// - The new quantity is zero or negative
/// - Another line of the same transaction already references the new product
/// - Reversal or re-apply would drive a stock counter negative
/// - The database operation fails
pub async fn update_transaction_line(
    db: &DatabaseConnection,
    line_id: i64,
    new_product_id: i64,
    new_quantity: i64,
) -> Result<transaction_detail::Model> {
    let txn = db.begin().await?;

    let detail = TransactionDetail::find_by_id(line_id)
        .one(&txn)
        .await?
        .ok_or(Error::LineNotFound { id: line_id })?;

    let header = StockTransaction::find_by_id(detail.transaction_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::TransactionNotFound {
            reference: detail.transaction_id.to_string(),
        })?;

    if new_quantity <= 0 {
        return Err(Error::InvalidQuantity {
            quantity: new_quantity,
        });
    }

    // One line per (transaction, product)
    if new_product_id != detail.product_id {
        let clash = TransactionDetail::find()
            .filter(transaction_detail::Column::TransactionId.eq(header.id))
            .filter(transaction_detail::Column::ProductId.eq(new_product_id))
            .one(&txn)
            .await?;
        if clash.is_some() {
            return Err(Error::DuplicateLineProduct {
                product_id: new_product_id,
            });
        }
    }

    reverse_line(&txn, &header, &detail).await?;
    adjust_stock(
        &txn,
        new_product_id,
        line_delta(header.transaction_type, new_quantity),
    )
    .await?;

    let mut line: transaction_detail::ActiveModel = detail.into();
    line.product_id = Set(new_product_id);
    line.quantity = Set(new_quantity);
    let updated = line.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a detail line, reversing its stock effect.
///
/// Reversal and row deletion happen in one database transaction; after it
/// commits, the product's stock is exactly what it was before the line was
/// applied.
///
/// # Errors
/// Returns an error if:
/// - No detail line matches `line_id`
/// - The reversal would drive the stock counter negative
/// - The database operation fails
pub async fn delete_transaction_line(db: &DatabaseConnection, line_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let detail = TransactionDetail::find_by_id(line_id)
        .one(&txn)
        .await?
        .ok_or(Error::LineNotFound { id: line_id })?;

    let header = StockTransaction::find_by_id(detail.transaction_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::TransactionNotFound {
            reference: detail.transaction_id.to_string(),
        })?;

    reverse_line(&txn, &header, &detail).await?;
    detail.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
