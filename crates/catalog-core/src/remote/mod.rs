//! Remote Catalog Client
//!
//! The read-only source of items. Stateless; all caching lives in `Catalog`.

mod http;
mod memory;
pub mod wire;

use async_trait::async_trait;

use crate::domain::{CatalogResult, Item};

pub use http::HttpCatalogClient;
pub use memory::InMemoryCatalog;

/// Category labels that exist upstream but cannot be selected
pub const RESERVED_CATEGORIES: &[&str] = &["unknown", "shadow"];

/// A page entry, resolved to an `Item` via its locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub name: String,
    pub locator: String,
}

/// One page of summaries plus the source's own "more remains" signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub summaries: Vec<ItemSummary>,
    pub has_more: bool,
}

/// Read-only catalog contract
///
/// Futures are not required to be `Send`; the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Summaries starting at `offset`
    async fn list_page(&self, offset: usize, limit: usize) -> CatalogResult<Page>;

    /// Resolve a summary locator to the full item
    async fn get_by_locator(&self, locator: &str) -> CatalogResult<Item>;

    async fn get_by_id(&self, id: u32) -> CatalogResult<Item>;

    /// Exact name lookup, case-insensitive
    async fn get_by_name(&self, name: &str) -> CatalogResult<Item>;

    /// Selectable category labels, reserved labels removed
    async fn list_categories(&self) -> CatalogResult<Vec<String>>;
}

/// Drop reserved labels, keeping order
pub fn selectable_categories(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    labels
        .into_iter()
        .filter(|label| !RESERVED_CATEGORIES.contains(&label.as_str()))
        .collect()
}
