//! Item record and status
//!
//! An Item is a single shopping-list entry. Its JSON shape is the on-disk
//! format: `{"id": "...", "description": "...", "status": "PENDING" | "DONE"}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComprarError;
use crate::id::generate_item_id;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier, assigned by the caller
    pub id: String,

    /// Free-form user text
    pub description: String,

    /// Current status
    pub status: ItemStatus,
}

/// Whether an item is still to buy or already done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    Pending,
    Done,
}

impl ItemStatus {
    /// Both statuses in display order
    pub const ALL: [ItemStatus; 2] = [ItemStatus::Pending, ItemStatus::Done];

    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Pending => ItemStatus::Done,
            ItemStatus::Done => ItemStatus::Pending,
        }
    }

    /// Single-character marker shown next to an item
    pub fn marker(self) -> &'static str {
        match self {
            ItemStatus::Pending => "○",
            ItemStatus::Done => "●",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Done => "done",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ComprarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ItemStatus::Pending),
            "done" => Ok(ItemStatus::Done),
            _ => Err(ComprarError::InvalidStatus(s.to_string())),
        }
    }
}

impl Item {
    /// Create a pending item with a fresh id
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: generate_item_id(),
            description: description.into(),
            status: ItemStatus::Pending,
        }
    }

    /// Create an item with explicit fields
    pub fn with_id(id: impl Into<String>, description: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status,
        }
    }

    /// Flip the status in place
    pub fn toggle(&mut self) {
        self.status = self.status.toggled();
    }

    pub fn is_done(&self) -> bool {
        self.status == ItemStatus::Done
    }
}
