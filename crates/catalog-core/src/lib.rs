//! Catalog Core
//!
//! Client-side collection state for the Pokedex browser app.
//!
//! Layered like the app itself:
//! - domain: items and error types
//! - state: the pure reducer over `CatalogEvent`
//! - catalog: the mutable holder that persists favorites and notifies observers
//! - remote / favorites: the two I/O contracts the holder depends on
//! - orchestrator / trigger / detail: thin controllers over the above

pub mod catalog;
pub mod config;
pub mod detail;
pub mod domain;
pub mod favorites;
pub mod filter;
pub mod orchestrator;
pub mod remote;
pub mod state;
pub mod trigger;
pub mod view_model;

#[cfg(test)]
mod test_properties;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use detail::{load_detail, DetailKey, DetailState};
pub use domain::{
    Ability, CatalogError, CatalogResult, CategorySlot, ConfigError, Item, ItemImages, Stat,
    StorageError,
};
pub use favorites::{FavoritesStore, JsonFavoritesStore, KeyValueBackend, MemoryBackend};
pub use filter::FilterCriteria;
pub use orchestrator::{FetchOrchestrator, LoadOutcome, SkipReason};
pub use remote::{CatalogSource, HttpCatalogClient, InMemoryCatalog, ItemSummary, Page};
pub use state::{reduce, CatalogEvent, CatalogState, Status};
