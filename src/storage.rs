//! Browser Storage
//!
//! `window.localStorage` as a catalog-core key/value backend. Records are
//! stored as raw strings; decoding stays in catalog-core.

use catalog_core::{KeyValueBackend, StorageError};
use gloo::storage::{LocalStorage, Storage};

pub struct BrowserStorage;

fn unavailable(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", e))
}

impl KeyValueBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw().get_item(key).map_err(unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(key, value).map_err(unavailable)
    }
}
