//! Load/save/append behaviour of the file-backed transaction table.
use std::sync::Arc;

use storefront_bot::database::{TransactionRecord, TransactionStore, TransactionTable};
use storefront_bot::error::StoreError;
use tempfile::TempDir;

fn record(item: &str, price: i64) -> TransactionRecord {
    TransactionRecord {
        item: item.to_string(),
        price,
        date: "8 Oktober 2026 pukul 07.05".to_string(),
    }
}

#[tokio::test]
async fn missing_document_loads_empty_and_is_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");
    let store = TransactionStore::new(&path);

    let table = store.load().await.unwrap();
    assert!(table.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

    // Second read is stable.
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn appends_keep_call_order_per_customer() {
    let dir = TempDir::new().unwrap();
    let store = TransactionStore::new(dir.path().join("transactions.json"));

    store.append("111", record("Gamepass", 15000)).await.unwrap();
    store.append("222", record("Robux 400", 60000)).await.unwrap();
    store.append("111", record("Robux 800", 110000)).await.unwrap();
    store.append("111", record("VIP", 25000)).await.unwrap();

    let items: Vec<_> = store
        .records_for("111")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.item)
        .collect();
    assert_eq!(items, ["Gamepass", "Robux 800", "VIP"]);
    assert_eq!(store.records_for("222").await.unwrap().len(), 1);
    assert!(store.records_for("333").await.unwrap().is_empty());
}

#[tokio::test]
async fn document_uses_harga_field_and_pretty_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");
    let store = TransactionStore::new(&path);
    store.append("111", record("Gamepass", 15000)).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        raw,
        "{\n  \"111\": [\n    {\n      \"item\": \"Gamepass\",\n      \"harga\": 15000,\n      \"date\": \"8 Oktober 2026 pukul 07.05\"\n    }\n  ]\n}"
    );
}

#[tokio::test]
async fn save_of_load_leaves_content_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");
    let handwritten = r#"{"999": [{"item": "A", "harga": 1, "date": "x"}], "123": [{"item": "B", "harga": 2, "date": "y"}, {"item": "C", "harga": -3, "date": "z"}]}"#;
    std::fs::write(&path, handwritten).unwrap();
    let store = TransactionStore::new(&path);

    let table = store.load().await.unwrap();
    store.save(&table).await.unwrap();

    let before: serde_json::Value = serde_json::from_str(handwritten).unwrap();
    let after: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(before, after);

    // Once written by the store, a further round trip is byte-identical.
    let first = std::fs::read_to_string(&path).unwrap();
    let table: TransactionTable = store.load().await.unwrap();
    store.save(&table).await.unwrap();
    assert_eq!(first, std::fs::read_to_string(&path).unwrap());
}

#[tokio::test]
async fn corrupt_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = TransactionStore::new(&path);

    assert!(matches!(store.load().await, Err(StoreError::Json { .. })));
    assert!(matches!(
        store.append("1", record("x", 1)).await,
        Err(StoreError::Json { .. })
    ));
    // Nothing was overwritten.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_not_lost() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(TransactionStore::new(dir.path().join("transactions.json")));

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let store = store.clone();
        tasks.spawn(async move {
            let customer = if i % 2 == 0 { "even" } else { "odd" };
            store
                .append(customer, record(&format!("item-{i}"), i))
                .await
                .unwrap();
        });
    }
    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }

    assert_eq!(store.records_for("even").await.unwrap().len(), 10);
    assert_eq!(store.records_for("odd").await.unwrap().len(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn reads_during_appends_never_fail_or_lose_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transactions.json");
    // Document is absent so the first readers and writers race to create it.
    let store = Arc::new(TransactionStore::new(&path));

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..200 {
        let writer = store.clone();
        tasks.spawn(async move {
            writer
                .append("c", record(&format!("item-{i}"), i))
                .await
                .map(|_| ())
        });
        let reader = store.clone();
        tasks.spawn(async move { reader.records_for("c").await.map(|_| ()) });
    }
    let mut errors = Vec::new();
    while let Some(res) = tasks.join_next().await {
        if let Err(e) = res.unwrap() {
            errors.push(e.to_string());
        }
    }

    assert!(errors.is_empty(), "store errors: {errors:?}");
    assert_eq!(store.records_for("c").await.unwrap().len(), 200);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(serde_json::from_str::<TransactionTable>(&raw).is_ok());
    assert!(!dir.path().join("transactions.json.tmp").exists());
}
