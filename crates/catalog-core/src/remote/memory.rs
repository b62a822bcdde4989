//! In-memory catalog source
//!
//! Deterministic stand-in for the HTTP client with failure injection.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use super::{selectable_categories, CatalogSource, ItemSummary, Page};
use crate::domain::{CatalogError, CatalogResult, Item};

const LOCATOR_PREFIX: &str = "memory://pokemon/";

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: Vec<Item>,
    categories: Vec<String>,
    failing_ids: RefCell<HashSet<u32>>,
    fail_pages: Cell<bool>,
    page_requests: Cell<usize>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, ..Default::default() }
    }

    pub fn with_categories(mut self, labels: &[&str]) -> Self {
        self.categories = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Make detail resolution of `id` fail with a 500
    pub fn fail_item(&self, id: u32) {
        self.failing_ids.borrow_mut().insert(id);
    }

    pub fn heal_item(&self, id: u32) {
        self.failing_ids.borrow_mut().remove(&id);
    }

    /// Make page listing fail with a 503
    pub fn set_fail_pages(&self, fail: bool) {
        self.fail_pages.set(fail);
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.get()
    }

    pub fn locator_for(id: u32) -> String {
        format!("{}{}", LOCATOR_PREFIX, id)
    }

    fn resolve(&self, id: u32, what: impl FnOnce() -> String) -> CatalogResult<Item> {
        if self.failing_ids.borrow().contains(&id) {
            return Err(CatalogError::Status { status: 500 });
        }
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(what()))
    }
}

#[async_trait(?Send)]
impl CatalogSource for InMemoryCatalog {
    async fn list_page(&self, offset: usize, limit: usize) -> CatalogResult<Page> {
        self.page_requests.set(self.page_requests.get() + 1);
        if self.fail_pages.get() {
            return Err(CatalogError::Status { status: 503 });
        }
        let end = (offset + limit).min(self.items.len());
        let start = offset.min(end);
        Ok(Page {
            summaries: self.items[start..end]
                .iter()
                .map(|item| ItemSummary { name: item.name.clone(), locator: Self::locator_for(item.id) })
                .collect(),
            has_more: end < self.items.len(),
        })
    }

    async fn get_by_locator(&self, locator: &str) -> CatalogResult<Item> {
        let id = locator
            .strip_prefix(LOCATOR_PREFIX)
            .and_then(|rest| rest.parse::<u32>().ok())
            .ok_or_else(|| CatalogError::NotFound(locator.to_string()))?;
        self.resolve(id, || locator.to_string())
    }

    async fn get_by_id(&self, id: u32) -> CatalogResult<Item> {
        self.resolve(id, || format!("Pokemon #{}", id))
    }

    async fn get_by_name(&self, name: &str) -> CatalogResult<Item> {
        let wanted = name.to_lowercase();
        let id = self
            .items
            .iter()
            .find(|item| item.name == wanted)
            .map(|item| item.id)
            .ok_or_else(|| CatalogError::NotFound(format!("Pokemon \"{}\"", name)))?;
        self.resolve(id, || format!("Pokemon \"{}\"", name))
    }

    async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        Ok(selectable_categories(self.categories.iter().cloned()))
    }
}
