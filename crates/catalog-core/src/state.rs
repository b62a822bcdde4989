//! Collection State
//!
//! `reduce` is the only way state changes. It is a pure function of the prior
//! state and one event, so every transition can be tested without a runtime.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::debug;

use crate::domain::Item;
use crate::filter::{filter_indices, FilterCriteria};

/// Network status of the collection. Favorites have none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Every transition the collection accepts
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    BeginFetch,
    /// `generation` is the value observed when the fetch began
    FetchSucceeded {
        generation: u64,
        items: Vec<Item>,
        has_more: bool,
    },
    FetchFailed {
        generation: u64,
        message: String,
    },
    SetSearchText(String),
    SetCategoryFilter(Vec<String>),
    ToggleCategoryFilter(String),
    ClearCategoryFilter,
    /// Clears the collection and filters. Favorites survive.
    Reset,
    AddFavorite(Item),
    RemoveFavorite(u32),
    ToggleFavorite(Item),
    /// Startup load path; replaces favorites without a write-back
    LoadFavorites(Vec<Item>),
}

/// Collection, derived view, cursor, status and favorites
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    items: Vec<Item>,
    /// Indices into `items`; rebuilt whenever `items` or the criteria change
    filtered: Vec<usize>,
    favorites: Vec<Item>,
    status: Status,
    search_text: String,
    selected_categories: IndexSet<String>,
    offset: usize,
    has_more: bool,
    generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            favorites: Vec::new(),
            status: Status::Idle,
            search_text: String::new(),
            selected_categories: IndexSet::new(),
            offset: 0,
            has_more: true,
            generation: 0,
        }
    }

    /// Full collection in arrival order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The filtered view, in collection order
    pub fn filtered_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.filtered.iter().map(move |&idx| &self.items[idx])
    }

    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn favorites(&self) -> &[Item] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.iter().any(|f| f.id == id)
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_categories(&self) -> &IndexSet<String> {
        &self.selected_categories
    }

    pub fn criteria(&self) -> FilterCriteria<'_> {
        FilterCriteria::new(&self.search_text, &self.selected_categories)
    }

    /// Search text or a category selection is in effect
    pub fn is_filtering(&self) -> bool {
        self.criteria().is_active()
    }

    /// Summaries consumed from the source so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Bumped on every reset; fetch outcomes from older generations are dropped
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn refilter(&mut self) {
        let criteria = FilterCriteria::new(&self.search_text, &self.selected_categories);
        self.filtered = filter_indices(&self.items, &criteria);
    }
}

/// Apply one event
pub fn reduce(mut state: CatalogState, event: CatalogEvent) -> CatalogState {
    match event {
        CatalogEvent::BeginFetch => {
            state.status = Status::Loading;
        }
        CatalogEvent::FetchSucceeded { generation, items, has_more } => {
            if generation != state.generation {
                debug!(
                    "dropping stale page from generation {} (current {})",
                    generation, state.generation
                );
                return state;
            }
            let received = items.len();
            let mut seen: HashSet<u32> = state.items.iter().map(|item| item.id).collect();
            let before = state.items.len();
            state.items.extend(items.into_iter().filter(|item| seen.insert(item.id)));
            let added = state.items.len() - before;
            if added < received {
                debug!("merged page: {} new, {} duplicates skipped", added, received - added);
            }
            state.offset += added;
            state.has_more = has_more;
            state.status = Status::Idle;
            state.refilter();
        }
        CatalogEvent::FetchFailed { generation, message } => {
            if generation != state.generation {
                debug!("dropping stale failure from generation {}: {}", generation, message);
                return state;
            }
            state.status = Status::Error(message);
        }
        CatalogEvent::SetSearchText(text) => {
            state.search_text = text;
            state.refilter();
        }
        CatalogEvent::SetCategoryFilter(labels) => {
            state.selected_categories = labels.into_iter().collect();
            state.refilter();
        }
        CatalogEvent::ToggleCategoryFilter(label) => {
            if !state.selected_categories.shift_remove(&label) {
                state.selected_categories.insert(label);
            }
            state.refilter();
        }
        CatalogEvent::ClearCategoryFilter => {
            state.selected_categories.clear();
            state.refilter();
        }
        CatalogEvent::Reset => {
            return CatalogState {
                favorites: state.favorites,
                generation: state.generation + 1,
                ..CatalogState::new()
            };
        }
        CatalogEvent::AddFavorite(item) => {
            if !state.is_favorite(item.id) {
                state.favorites.push(item);
            }
        }
        CatalogEvent::RemoveFavorite(id) => {
            state.favorites.retain(|f| f.id != id);
        }
        CatalogEvent::ToggleFavorite(item) => {
            if state.is_favorite(item.id) {
                state.favorites.retain(|f| f.id != item.id);
            } else {
                state.favorites.push(item);
            }
        }
        CatalogEvent::LoadFavorites(items) => {
            let mut seen = HashSet::new();
            state.favorites = items.into_iter().filter(|item| seen.insert(item.id)).collect();
        }
    }
    state
}
