//! Stock transaction entity - Represents a stock movement header.
//!
//! A transaction groups one or more detail lines under a direction
//! ([`TransactionType::In`] or [`TransactionType::Out`]) and a globally
//! unique code (e.g., "GRN-001" for a goods receipt, "DO-001" for a
//! dispatch). The `date` defaults to creation time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a stock transaction: goods received or goods issued
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum TransactionType {
    /// Stock in (goods receipt)
    #[sea_orm(string_value = "IN")]
    In,
    /// Stock out (dispatch)
    #[sea_orm(string_value = "OUT")]
    Out,
}

/// Stock transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Globally unique transaction code (e.g., "GRN-001")
    #[sea_orm(unique)]
    pub transaction_code: String,
    /// Direction of every line in this transaction
    pub transaction_type: TransactionType,
    /// When the transaction took place; defaults to creation time
    pub date: DateTimeUtc,
    /// Optional free-text notes
    pub notes: Option<String>,
}

/// Defines relationships between `StockTransaction` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One transaction has many detail lines
    #[sea_orm(has_many = "super::transaction_detail::Entity")]
    TransactionDetails,
}

impl Related<super::transaction_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
