//! Domain Layer
//!
//! Catalog entities and error types.
//! Only serde and thiserror here; no I/O.

mod error;
mod item;

pub use error::{CatalogError, CatalogResult, ConfigError, StorageError};
pub use item::{Ability, CategorySlot, Item, ItemImages, Stat};
