//! List session integration tests

use comprar::app::ListSession;
use comprar::domain::ItemStatus;
use comprar::error::ComprarError;
use comprar::kv::{FileStore, KeyValueStore, MemoryStore};
use comprar::storage::{ITEMS_STORAGE_KEY, ItemsStorage};
use tempfile::TempDir;

#[tokio::test]
async fn test_shopping_trip() {
    let mut session = ListSession::new(ItemsStorage::new(MemoryStore::new()));
    session.refresh().await.unwrap();

    let milk = session.add("Milk").await.unwrap();
    let bread = session.add("Bread").await.unwrap();
    assert_eq!(session.items().len(), 2);

    session.toggle_status(&milk.id).await.unwrap();
    assert_eq!(session.items(), &[bread.clone()]);

    let done = session.set_filter(ItemStatus::Done).await.unwrap().to_vec();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].description, "Milk");

    let counts = session.counts().await.unwrap();
    assert_eq!((counts.pending, counts.done), (1, 1));

    session.remove(&milk.id).await.unwrap();
    assert!(session.items().is_empty());

    session.clear().await.unwrap();
    assert_eq!(session.counts().await.unwrap().total(), 0);
}

#[tokio::test]
async fn test_failed_refresh_keeps_displayed_items() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).await.unwrap();
    let mut session = ListSession::new(ItemsStorage::new(store));

    session.add("Milk").await.unwrap();
    let shown = session.items().to_vec();

    // Corrupt the blob behind the session's back
    let other = FileStore::open(temp_dir.path()).await.unwrap();
    other.set_item(ITEMS_STORAGE_KEY, "not json").await.unwrap();

    let err = session.set_filter(ItemStatus::Done).await.unwrap_err();
    assert!(matches!(err, ComprarError::StorageRead { .. }));
    assert_eq!(session.items(), shown.as_slice());
    assert_eq!(session.filter(), ItemStatus::Pending);
    assert_eq!(err.notice(), "Could not load the items.");
}

#[tokio::test]
async fn test_blank_add_never_reaches_storage() {
    let mut session = ListSession::new(ItemsStorage::new(MemoryStore::new()));
    let err = session.add("  ").await.unwrap_err();
    assert_eq!(err.notice(), "Enter a description to add.");
    assert!(session.storage().load_all().await.unwrap().is_empty());
}
