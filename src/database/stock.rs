//! File-backed singleton stock counter.

use super::models::StockRecord;
use super::transactions::write_document;
use crate::error::StoreError;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{info, instrument};

pub struct StockStore {
    path: PathBuf,
    default_stock: i64,
    lock: Mutex<()>,
}

impl StockStore {
    pub fn new(path: impl Into<PathBuf>, default_stock: i64) -> Self {
        Self {
            path: path.into(),
            default_stock,
            lock: Mutex::new(()),
        }
    }

    /// Writes the default record if the document is absent. Returns `true` when it created one.
    pub async fn ensure_initialized(&self) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        if exists {
            return Ok(false);
        }
        self.write_record(&StockRecord {
            stock: self.default_stock,
        })
        .await?;
        info!(target = "store.stock", path = %self.path.display(), stock = self.default_stock, "stock document created");
        Ok(true)
    }

    pub async fn load(&self) -> Result<StockRecord, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_record().await
    }

    pub async fn save(&self, record: &StockRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write_record(record).await
    }

    /// Replaces the stock value unconditionally.
    #[instrument(level = "debug", skip(self))]
    pub async fn set(&self, stock: i64) -> Result<StockRecord, StoreError> {
        let _guard = self.lock.lock().await;
        let mut record = self.read_record().await?;
        record.stock = stock;
        self.write_record(&record).await?;
        Ok(record)
    }

    async fn read_record(&self) -> Result<StockRecord, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        serde_json::from_str(&raw).map_err(|e| StoreError::json(&self.path, e))
    }

    async fn write_record(&self, record: &StockRecord) -> Result<(), StoreError> {
        let body =
            serde_json::to_string_pretty(record).map_err(|e| StoreError::json(&self.path, e))?;
        write_document(&self.path, &body).await
    }
}
