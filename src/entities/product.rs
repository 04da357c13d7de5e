//! Product entity - Represents a product held in the warehouse.
//!
//! Each product carries a globally unique part number, a free-text
//! description, and a denormalized `current_stock` counter. The counter is
//! owned by the ledger engine: it is only ever written through
//! [`crate::core::product::adjust_stock`] as a side effect of transaction
//! detail operations, never set directly.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Globally unique part number (e.g., "P-100")
    #[sea_orm(unique)]
    pub part_no: String,
    /// Free-text description, may be empty
    pub description: String,
    /// Current available stock; never negative
    pub current_stock: i64,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product is referenced by many transaction detail lines
    #[sea_orm(has_many = "super::transaction_detail::Entity")]
    TransactionDetails,
}

impl Related<super::transaction_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
