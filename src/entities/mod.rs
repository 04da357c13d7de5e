//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod product;
pub mod stock_transaction;
pub mod transaction_detail;

// Re-export specific types to avoid conflicts
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use stock_transaction::{
    Column as StockTransactionColumn, Entity as StockTransaction, Model as StockTransactionModel,
    TransactionType,
};
pub use transaction_detail::{
    Column as TransactionDetailColumn, Entity as TransactionDetail, Model as TransactionDetailModel,
};
