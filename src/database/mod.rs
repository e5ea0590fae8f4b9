//! Flat-file persistence. Each store owns one pretty-printed JSON document and
//! re-reads it on every call; there is no in-memory cache.

pub mod models;
pub mod stock;
pub mod transactions;

pub use models::{StockRecord, TransactionRecord, TransactionTable};
pub use stock::StockStore;
pub use transactions::TransactionStore;
