//! Shapes of the two persisted JSON documents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One purchase. Field names match the on-disk layout (`item`, `harga`, `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub item: String,
    /// Price in whole Rupiah.
    #[serde(rename = "harga")]
    pub price: i64,
    /// Creation time, already rendered for display.
    pub date: String,
}

/// Customer id (decimal Discord user id) -> purchases in insertion order.
pub type TransactionTable = BTreeMap<String, Vec<TransactionRecord>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub stock: i64,
}
