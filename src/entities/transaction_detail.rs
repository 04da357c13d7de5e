//! Transaction detail entity - Represents a line item within a stock transaction.
//!
//! Each line binds a product and a strictly positive quantity to its owning
//! transaction. A product may appear at most once per transaction; the
//! composite unique index backing that rule is created in
//! [`crate::config::database::create_tables`]. Deleting a transaction
//! cascades to its lines, while a product referenced by any line is
//! protected from deletion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction detail database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transaction_details")]
pub struct Model {
    /// Unique identifier for the detail line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the owning stock transaction
    pub transaction_id: i64,
    /// ID of the product this line moves
    pub product_id: i64,
    /// Quantity moved; strictly positive
    pub quantity: i64,
}

/// Defines relationships between `TransactionDetail` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each detail line belongs to one stock transaction
    #[sea_orm(
        belongs_to = "super::stock_transaction::Entity",
        from = "Column::TransactionId",
        to = "super::stock_transaction::Column::Id",
        on_delete = "Cascade"
    )]
    StockTransaction,
    /// Each detail line references one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Restrict"
    )]
    Product,
}

impl Related<super::stock_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockTransaction.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
