//! Items persistence over a key-value store.
//!
//! The whole collection lives as one JSON array under [`ITEMS_STORAGE_KEY`].
//! Every mutation reads the full array, changes it in memory and writes it
//! back. A missing key or an empty value reads as an empty collection.

use log::{debug, info};
use tokio::sync::Mutex;

use crate::domain::{Item, ItemStatus};
use crate::error::{ComprarError, Operation, Result, StoreError};
use crate::kv::KeyValueStore;

/// Key the items blob is stored under.
pub const ITEMS_STORAGE_KEY: &str = "@comprar:items";

/// Pending/done totals for the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.done
    }
}

/// Persistence for the item collection.
///
/// Read-modify-write cycles hold `write_lock`, so callers sharing one
/// instance never lose each other's updates. Separate instances over the
/// same store are not coordinated.
pub struct ItemsStorage<S: KeyValueStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> std::fmt::Debug for ItemsStorage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemsStorage").finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> ItemsStorage<S> {
    /// Wrap the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the full collection. A missing key is an empty collection.
    pub async fn load_all(&self) -> Result<Vec<Item>> {
        self.read(Operation::LoadAll).await
    }

    /// Overwrite the full collection.
    pub async fn save_all(&self, items: &[Item]) -> Result<()> {
        self.write(Operation::SaveAll, items).await
    }

    /// Items with the given status, in insertion order.
    pub async fn get_by_status(&self, status: ItemStatus) -> Result<Vec<Item>> {
        let items = self.read(Operation::GetByStatus).await?;
        Ok(items.into_iter().filter(|item| item.status == status).collect())
    }

    /// Append `item` and return the updated collection.
    ///
    /// No uniqueness or content checks happen here.
    pub async fn add(&self, item: Item) -> Result<Vec<Item>> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read(Operation::Add).await?;
        info!("Adding item {} ({})", item.id, item.description);
        items.push(item);
        self.write(Operation::Add, &items).await?;
        Ok(items)
    }

    /// Drop every item whose id matches. Unknown ids are a no-op.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read(Operation::Remove).await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        info!("Removing item {} ({} matched)", id, before - items.len());
        self.write(Operation::Remove, &items).await
    }

    /// Flip PENDING <-> DONE on matching items. Unknown ids are a no-op.
    pub async fn toggle_status(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read(Operation::ToggleStatus).await?;
        for item in items.iter_mut().filter(|item| item.id == id) {
            item.toggle();
            info!("Item {} is now {}", item.id, item.status);
        }
        self.write(Operation::ToggleStatus, &items).await
    }

    /// Delete the storage key.
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        info!("Clearing all items");
        self.store
            .remove_item(ITEMS_STORAGE_KEY)
            .await
            .map_err(|source| ComprarError::StorageClear {
                op: Operation::Clear,
                source,
            })
    }

    /// Count items per status from a single read.
    pub async fn counts(&self) -> Result<StatusCounts> {
        let items = self.read(Operation::Counts).await?;
        let done = items.iter().filter(|item| item.is_done()).count();
        Ok(StatusCounts {
            pending: items.len() - done,
            done,
        })
    }

    async fn read(&self, op: Operation) -> Result<Vec<Item>> {
        let read_err = |source: StoreError| ComprarError::StorageRead { op, source };

        let raw = self.store.get_item(ITEMS_STORAGE_KEY).await.map_err(read_err)?;
        let items: Vec<Item> = match raw {
            Some(blob) if !blob.is_empty() => serde_json::from_str(&blob).map_err(|e| read_err(e.into()))?,
            _ => Vec::new(),
        };
        debug!("{}: loaded {} items", op, items.len());
        Ok(items)
    }

    async fn write(&self, op: Operation, items: &[Item]) -> Result<()> {
        let write_err = |source: StoreError| ComprarError::StorageWrite { op, source };

        let blob = serde_json::to_string(items).map_err(|e| write_err(e.into()))?;
        self.store
            .set_item(ITEMS_STORAGE_KEY, &blob)
            .await
            .map_err(write_err)?;
        debug!("{}: saved {} items", op, items.len());
        Ok(())
    }
}
