//! Product registry - Identity and stock-counter storage for products.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! products, plus the inventory snapshot used by callers to read current
//! stock levels. The `current_stock` counter itself is written exclusively
//! through [`adjust_stock`], which only the ledger engine calls; exposing a
//! direct stock setter would let callers break the ledger invariant.

use crate::{
    entities::{Product, product, transaction_detail},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Retrieves all products ordered by part number.
///
/// This is the caller-facing inventory snapshot: every product together with
/// its current stock level, in a stable, restartable order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_inventory_snapshot(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::PartNo)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific product by its part number, returning None if not found.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_part_no(
    db: &DatabaseConnection,
    part_no: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::PartNo.eq(part_no))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product with zero stock, performing input validation.
///
/// The part number is trimmed and must be non-empty and globally unique.
/// Stock always starts at zero; it can only change through transactions.
///
/// # Errors
/// Returns an error if:
/// - The part number is empty or whitespace-only
/// - A product with the same part number already exists
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    part_no: String,
    description: String,
) -> Result<product::Model> {
    let part_no = part_no.trim().to_string();
    if part_no.is_empty() {
        return Err(Error::Config {
            message: "Part number cannot be empty".to_string(),
        });
    }

    if get_product_by_part_no(db, &part_no).await?.is_some() {
        return Err(Error::DuplicatePartNumber { part_no });
    }

    let product = product::ActiveModel {
        part_no: Set(part_no),
        description: Set(description),
        current_stock: Set(0),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product's part number and description.
///
/// The stock counter is deliberately not updatable here; it belongs to the
/// ledger engine.
///
/// # Errors
/// Returns an error if:
/// - The part number is empty or whitespace-only
/// - The product does not exist
/// - Another product already uses the new part number
/// - The database update operation fails
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    new_part_no: String,
    new_description: String,
) -> Result<product::Model> {
    let new_part_no = new_part_no.trim().to_string();
    if new_part_no.is_empty() {
        return Err(Error::Config {
            message: "Part number cannot be empty".to_string(),
        });
    }

    let existing = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            reference: product_id.to_string(),
        })?;

    if existing.part_no != new_part_no
        && get_product_by_part_no(db, &new_part_no).await?.is_some()
    {
        return Err(Error::DuplicatePartNumber {
            part_no: new_part_no,
        });
    }

    let mut product: product::ActiveModel = existing.into();
    product.part_no = Set(new_part_no);
    product.description = Set(new_description);

    product.update(db).await.map_err(Into::into)
}

/// Deletes a product, enforcing the protect-on-delete rule.
///
/// A product that is still referenced by any transaction detail line cannot
/// be removed; its movement history would become unverifiable.
///
/// # Errors
/// Returns an error if:
/// - The product does not exist
/// - Any transaction detail line still references the product
/// - The database delete operation fails
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            reference: product_id.to_string(),
        })?;

    let references = transaction_detail::Entity::find()
        .filter(transaction_detail::Column::ProductId.eq(product_id))
        .count(db)
        .await?;
    if references > 0 {
        return Err(Error::ProductInUse {
            part_no: product.part_no,
        });
    }

    product.delete(db).await?;
    Ok(())
}

/// Adjusts a product's stock counter by atomically adding a signed delta.
///
/// This is the only write path for `current_stock`, used exclusively by the
/// ledger engine. Instead of reading the current value, modifying it, and
/// writing it back (which can lose updates under concurrent writers), the
/// adjustment is a single SQL statement:
/// `UPDATE products SET current_stock = current_stock + delta WHERE id = ?`
///
/// Any adjustment whose result would be negative is rejected with
/// [`Error::InsufficientStock`], which covers both OUT movements exceeding
/// the available stock and reversals of IN movements whose goods were
/// already issued.
///
/// # Arguments
/// * `db` - Database connection or transaction
/// * `product_id` - ID of the product to adjust
/// * `delta` - Signed quantity to add to the stock counter
///
/// # Returns
/// The updated product model
pub(crate) async fn adjust_stock<C>(db: &C, product_id: i64, delta: i64) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            reference: product_id.to_string(),
        })?;

    if product.current_stock + delta < 0 {
        return Err(Error::InsufficientStock {
            part_no: product.part_no,
            available: product.current_stock,
            required: -delta,
        });
    }

    // Perform atomic update: current_stock = current_stock + delta
    Product::update_many()
        .col_expr(
            product::Column::CurrentStock,
            Expr::col(product::Column::CurrentStock).add(delta),
        )
        .filter(product::Column::Id.eq(product_id))
        .exec(db)
        .await?;

    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            reference: product_id.to_string(),
        })
}

/// Seeds the product catalog from configuration entries.
///
/// Entries whose part number already exists are skipped, so seeding is safe
/// to run on every startup. Returns the number of products inserted.
///
/// # Errors
/// Returns an error if any lookup or insert fails.
pub async fn seed_products(
    db: &DatabaseConnection,
    seeds: &[crate::config::catalog::ProductSeed],
) -> Result<usize> {
    let mut inserted = 0;
    for seed in seeds {
        if get_product_by_part_no(db, &seed.part_no).await?.is_none() {
            create_product(db, seed.part_no.clone(), seed.description.clone()).await?;
            inserted += 1;
            tracing::info!(part_no = %seed.part_no, "seeded product");
        }
    }
    Ok(inserted)
}
