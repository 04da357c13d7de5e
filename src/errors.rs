//! Unified error types for the stockroom crate.
//!
//! Every fallible operation returns [`Result`]. Validation failures carry
//! enough context for a caller (or transport layer) to explain the rejection
//! without re-querying the store. Underlying `SeaORM` errors pass through
//! unmodified via the [`Error::Database`] variant; the core never retries them.

use thiserror::Error;

/// All error conditions the stockroom core can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing file, bad TOML, invalid input)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A product with this part number already exists
    #[error("Part number '{part_no}' already exists")]
    DuplicatePartNumber {
        /// The conflicting part number
        part_no: String,
    },

    /// A transaction with this code already exists
    #[error("Transaction code '{code}' already exists")]
    DuplicateTransactionCode {
        /// The conflicting transaction code
        code: String,
    },

    /// The same product appears more than once within a single transaction
    #[error("Product {product_id} appears more than once in the transaction")]
    DuplicateLineProduct {
        /// ID of the product referenced by more than one line
        product_id: i64,
    },

    /// A detail line quantity was zero or negative
    #[error("Quantity must be a positive number, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// A stock movement would drive a product's stock below zero
    #[error("Insufficient stock for {part_no}. Available: {available}, Required: {required}")]
    InsufficientStock {
        /// Part number of the affected product
        part_no: String,
        /// Stock on hand before the rejected movement
        available: i64,
        /// Quantity the movement needed
        required: i64,
    },

    /// A transaction was submitted without any detail lines
    #[error("A transaction must have at least one detail line")]
    EmptyTransaction,

    /// No product matched the given ID or part number
    #[error("Product not found: {reference}")]
    ProductNotFound {
        /// The ID or part number that failed to resolve
        reference: String,
    },

    /// No transaction matched the given ID or code
    #[error("Transaction not found: {reference}")]
    TransactionNotFound {
        /// The ID or code that failed to resolve
        reference: String,
    },

    /// No transaction detail line matched the given ID
    #[error("Transaction line not found: {id}")]
    LineNotFound {
        /// The detail line ID that failed to resolve
        id: i64,
    },

    /// A product is still referenced by transaction lines and cannot be deleted
    #[error("Product '{part_no}' is referenced by transaction lines and cannot be deleted")]
    ProductInUse {
        /// Part number of the protected product
        part_no: String,
    },

    /// Underlying persistence error, passed through untouched
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
