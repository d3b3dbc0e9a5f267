//! Domain types for Comprar
//!
//! - Item: a single list entry with id, description and status
//! - ItemStatus: PENDING or DONE

pub mod item;

pub use item::{Item, ItemStatus};
