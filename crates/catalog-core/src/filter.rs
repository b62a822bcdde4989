//! Filtered View
//!
//! Name search AND category selection. The view is always recomputed from
//! the full collection, never patched.

use indexmap::IndexSet;

use crate::domain::Item;

/// Borrowed filter inputs
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria<'a> {
    pub search: &'a str,
    pub categories: &'a IndexSet<String>,
}

impl<'a> FilterCriteria<'a> {
    pub fn new(search: &'a str, categories: &'a IndexSet<String>) -> Self {
        Self { search, categories }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.categories.is_empty()
    }

    /// Case-insensitive substring on name, and at least one selected category
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_folded(item, &self.search.to_lowercase())
    }

    fn matches_folded(&self, item: &Item, needle: &str) -> bool {
        let name_ok = needle.is_empty() || item.name.to_lowercase().contains(needle);
        let category_ok = self.categories.is_empty()
            || item.category_names().any(|c| self.categories.contains(c));
        name_ok && category_ok
    }
}

/// Positions in `items` that pass `criteria`, in collection order
pub fn filter_indices(items: &[Item], criteria: &FilterCriteria<'_>) -> Vec<usize> {
    let needle = criteria.search.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| criteria.matches_folded(item, &needle))
        .map(|(idx, _)| idx)
        .collect()
}
