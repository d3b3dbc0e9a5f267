//! Comprar - a shopping list persisted as a single JSON blob
//!
//! Items live in one JSON array under a fixed key of a key-value store.
//! `storage::ItemsStorage` owns the read-modify-write operations over that
//! blob; `app::ListSession` adds the filter state and input checks a front
//! end needs.

pub mod app;
pub mod domain;
pub mod error;
pub mod id;
pub mod kv;
pub mod storage;

pub use error::{ComprarError, Result};
