//! Favorites Persistence
//!
//! Favorites live in a single JSON record. Loading never fails: a missing or
//! corrupt record reads as an empty list so favorites never block startup.

use std::cell::RefCell;
use std::collections::HashMap;

use log::warn;

use crate::domain::{Item, StorageError};

/// Storage key used by the browser build
pub const FAVORITES_KEY: &str = "pokemonFavorites";

/// Durable home for the favorites list
pub trait FavoritesStore {
    /// Best-effort read; corrupt or missing data yields an empty list
    fn load(&self) -> Vec<Item>;

    /// Overwrite the stored list
    fn save(&self, favorites: &[Item]) -> Result<(), StorageError>;
}

/// Raw string key/value storage (localStorage, memory, ...)
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Strict decode of a stored record
pub fn try_decode_favorites(raw: &str) -> Result<Vec<Item>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Parse)
}

/// Decode that always produces a value
pub fn decode_favorites(raw: Option<&str>) -> Vec<Item> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match try_decode_favorites(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Failed to load favorites: {}", e);
            Vec::new()
        }
    }
}

pub fn encode_favorites(favorites: &[Item]) -> Result<String, StorageError> {
    serde_json::to_string(favorites).map_err(StorageError::Encode)
}

/// Favorites stored as one JSON array under `key`
pub struct JsonFavoritesStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonFavoritesStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> FavoritesStore for JsonFavoritesStore<B> {
    fn load(&self) -> Vec<Item> {
        match self.backend.get(&self.key) {
            Ok(raw) => decode_favorites(raw.as_deref()),
            Err(e) => {
                warn!("Failed to read favorites from {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn save(&self, favorites: &[Item]) -> Result<(), StorageError> {
        let encoded = encode_favorites(favorites)?;
        self.backend.set(&self.key, &encoded)
    }
}

/// In-process backend for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a corrupt record
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
