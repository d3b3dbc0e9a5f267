//! List session state.
//!
//! `ListSession` is the application layer over `ItemsStorage`: it tracks the
//! active status filter and the items currently on screen, validates input,
//! and re-queries after every mutation. A failed call leaves `filter` and
//! `items` as they were.

use log::{info, warn};

use crate::domain::{Item, ItemStatus};
use crate::error::{ComprarError, Result};
use crate::kv::KeyValueStore;
use crate::storage::{ItemsStorage, StatusCounts};

/// The list as a user currently sees it.
#[derive(Debug)]
pub struct ListSession<S: KeyValueStore> {
    storage: ItemsStorage<S>,
    /// Status currently filtered on
    filter: ItemStatus,
    /// Items matching `filter` as of the last refresh
    items: Vec<Item>,
}

impl<S: KeyValueStore> ListSession<S> {
    /// Create a session showing pending items. Call `refresh` to populate.
    pub fn new(storage: ItemsStorage<S>) -> Self {
        Self {
            storage,
            filter: ItemStatus::Pending,
            items: Vec::new(),
        }
    }

    pub fn filter(&self) -> ItemStatus {
        self.filter
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn storage(&self) -> &ItemsStorage<S> {
        &self.storage
    }

    /// Reload the items for the active filter.
    pub async fn refresh(&mut self) -> Result<&[Item]> {
        self.load(self.filter).await
    }

    /// Switch the filter and reload. The filter only changes if the load
    /// succeeds.
    pub async fn set_filter(&mut self, status: ItemStatus) -> Result<&[Item]> {
        self.load(status).await
    }

    async fn load(&mut self, status: ItemStatus) -> Result<&[Item]> {
        match self.storage.get_by_status(status).await {
            Ok(items) => {
                self.filter = status;
                self.items = items;
                Ok(&self.items)
            }
            Err(e) => {
                warn!("Failed to load {} items: {}", status, e);
                Err(e)
            }
        }
    }

    /// Add a pending item with a fresh id.
    ///
    /// Blank descriptions are rejected before touching storage. On success
    /// the filter is reset to pending.
    pub async fn add(&mut self, description: &str) -> Result<Item> {
        if description.trim().is_empty() {
            return Err(ComprarError::EmptyDescription);
        }

        let item = Item::new(description);
        self.storage.add(item.clone()).await?;
        self.load(ItemStatus::Pending).await?;
        info!("Added {}", item.description);
        Ok(item)
    }

    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.storage.remove(id).await?;
        self.refresh().await?;
        Ok(())
    }

    pub async fn toggle_status(&mut self, id: &str) -> Result<()> {
        self.storage.toggle_status(id).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Remove everything. The displayed list is emptied without re-querying.
    pub async fn clear(&mut self) -> Result<()> {
        self.storage.clear().await?;
        self.items.clear();
        Ok(())
    }

    pub async fn counts(&self) -> Result<StatusCounts> {
        self.storage.counts().await
    }
}
