//! Core business logic - Product registry, ledger engine, and transaction
//! operations, independent of any transport.

/// Stock ledger engine - the sole authority for stock mutation
pub mod ledger;
/// Product registry - identity, lookups, and the stock counter
pub mod product;
/// Transaction operations - atomic creation, deletion, and queries
pub mod transaction;
