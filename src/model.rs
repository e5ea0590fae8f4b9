//! Shared application state stored in Serenity's global context.

use crate::config::Config;
use crate::database::stock::StockStore;
use crate::database::transactions::TransactionStore;
use crate::ui::format::{CurrencyFormatter, IdLocale};
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` lives in the client's `TypeMap` so every handler sees the same stores.
pub struct AppState {
    /// Per-customer purchase history.
    pub transactions: TransactionStore,
    /// Robux stock counter.
    pub stock: StockStore,
    /// Presentation of amounts and dates in replies.
    pub formatter: Box<dyn CurrencyFormatter>,
}

impl AppState {
    pub fn new(transactions: TransactionStore, stock: StockStore) -> Self {
        Self {
            transactions,
            stock,
            formatter: Box::new(IdLocale),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TransactionStore::new(config.transactions_file.clone()),
            StockStore::new(config.stock_file.clone(), config.default_stock),
        )
    }

    pub fn with_formatter(mut self, formatter: Box<dyn CurrencyFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
