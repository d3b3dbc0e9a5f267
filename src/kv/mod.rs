//! Key-value store abstraction.
//!
//! The items layer only needs three string operations keyed by an opaque
//! string. Backends:
//! - `MemoryStore`: in-process map, lost on drop
//! - `FileStore`: one file per key in a directory
//! - `SqliteStore`: a single `kv` table in a SQLite database

mod file;
mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::{DB_FILE_NAME, SqliteStore};

/// Async string store keyed by opaque string keys.
///
/// Removing a key that does not exist succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key).await
    }
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_arc_forwards_to_inner() {
        let store = Arc::new(MemoryStore::new());
        let shared = Arc::clone(&store);

        shared.set_item("k", "v").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_boxed_trait_object() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set_item("k", "v").await.unwrap();
        store.remove_item("k").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }
}
