//! Storage layer for Comprar - the item collection persisted as one JSON blob
//! in a key-value store.

mod items;

pub use items::{ITEMS_STORAGE_KEY, ItemsStorage, StatusCounts};
