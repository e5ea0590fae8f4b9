//! Bootstrap and read/write behaviour of the stock document.
use std::sync::Arc;

use storefront_bot::config::DEFAULT_STOCK;
use storefront_bot::database::{StockRecord, StockStore};
use storefront_bot::error::StoreError;
use tempfile::TempDir;

#[tokio::test]
async fn absent_document_is_created_with_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stock").join("stock.json");
    let store = StockStore::new(&path, DEFAULT_STOCK);

    assert!(store.ensure_initialized().await.unwrap());
    assert_eq!(store.load().await.unwrap(), StockRecord { stock: 51497 });
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{\n  \"stock\": 51497\n}"
    );
}

#[tokio::test]
async fn ensure_initialized_never_touches_existing_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stock.json");
    let original = "{ \"stock\":   7 }";
    std::fs::write(&path, original).unwrap();
    let store = StockStore::new(&path, DEFAULT_STOCK);

    assert!(!store.ensure_initialized().await.unwrap());
    assert!(!store.ensure_initialized().await.unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    assert_eq!(store.load().await.unwrap().stock, 7);
}

#[tokio::test]
async fn set_overwrites_without_bounds() {
    let dir = TempDir::new().unwrap();
    let store = StockStore::new(dir.path().join("stock.json"), DEFAULT_STOCK);
    store.ensure_initialized().await.unwrap();

    assert_eq!(store.set(60000).await.unwrap().stock, 60000);
    assert_eq!(store.load().await.unwrap().stock, 60000);
    assert_eq!(store.set(-5).await.unwrap().stock, -5);
    assert_eq!(store.load().await.unwrap().stock, -5);
}

#[tokio::test]
async fn save_of_load_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stock.json");
    let store = StockStore::new(&path, 100);
    store.ensure_initialized().await.unwrap();

    let before = std::fs::read_to_string(&path).unwrap();
    let record = store.load().await.unwrap();
    store.save(&record).await.unwrap();
    assert_eq!(before, std::fs::read_to_string(&path).unwrap());
}

#[tokio::test]
async fn load_without_document_fails() {
    let dir = TempDir::new().unwrap();
    let store = StockStore::new(dir.path().join("missing.json"), DEFAULT_STOCK);
    assert!(matches!(store.load().await, Err(StoreError::Io { .. })));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn reads_during_updates_always_see_a_whole_document() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(StockStore::new(dir.path().join("stock.json"), DEFAULT_STOCK));
    store.ensure_initialized().await.unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..200 {
        let writer = store.clone();
        tasks.spawn(async move { writer.set(i).await.map(|_| ()) });
        let reader = store.clone();
        tasks.spawn(async move { reader.load().await.map(|_| ()) });
    }
    let mut errors = Vec::new();
    while let Some(res) = tasks.join_next().await {
        if let Err(e) = res.unwrap() {
            errors.push(e.to_string());
        }
    }

    assert!(errors.is_empty(), "store errors: {errors:?}");
    let stock = store.load().await.unwrap().stock;
    assert!((0..200).contains(&stock));
}
