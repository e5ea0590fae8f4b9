//! File-backed transaction table. Every call re-reads the document and every mutation
//! rewrites it in full.

use super::models::{TransactionRecord, TransactionTable};
use crate::error::StoreError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

pub struct TransactionStore {
    path: PathBuf,
    // Held for every read and write; reads may create the document.
    lock: Mutex<()>,
}

impl TransactionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Reads the whole table. A missing document is created as `{}` and read as empty.
    pub async fn load(&self) -> Result<TransactionTable, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_table().await
    }

    /// Overwrites the document with the pretty-printed table.
    pub async fn save(&self, table: &TransactionTable) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write_table(table).await
    }

    #[instrument(level = "debug", skip(self, record), fields(item = %record.item, price = record.price))]
    pub async fn append(
        &self,
        customer_id: &str,
        record: TransactionRecord,
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut table = self.read_table().await?;
        table
            .entry(customer_id.to_string())
            .or_default()
            .push(record);
        self.write_table(&table).await
    }

    /// Purchases recorded for one customer; empty when the customer has none.
    pub async fn records_for(
        &self,
        customer_id: &str,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let mut table = self.load().await?;
        Ok(table.remove(customer_id).unwrap_or_default())
    }

    // Callers must hold `lock`.
    async fn read_table(&self) -> Result<TransactionTable, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(target = "store.transactions", path = %self.path.display(), "creating empty table");
                write_document(&self.path, "{}").await?;
                return Ok(TransactionTable::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::json(&self.path, e))
    }

    // Callers must hold `lock`.
    async fn write_table(&self, table: &TransactionTable) -> Result<(), StoreError> {
        let body =
            serde_json::to_string_pretty(table).map_err(|e| StoreError::json(&self.path, e))?;
        write_document(&self.path, &body).await
    }
}

/// Replaces `path` with `body` via a sibling temp file and a rename, so readers never
/// observe a truncated document.
pub(crate) async fn write_document(path: &Path, body: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    fs::write(&temp_path, body)
        .await
        .map_err(|e| StoreError::io(&temp_path, e))?;
    fs::rename(&temp_path, path)
        .await
        .map_err(|e| StoreError::io(path, e))
}
