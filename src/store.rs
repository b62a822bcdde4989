//! Global Application State Store
//!
//! Reactive mirror of the catalog snapshot. Uses Leptos reactive_stores so
//! each view only re-renders for the fields it reads.

use catalog_core::{trigger, view_model, CatalogState, Item};
use leptos::prelude::*;
use reactive_stores::Store;

/// Read model for the views; written only by `sync_from_catalog` and category loading
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Filtered view, in collection order
    pub visible: Vec<Item>,
    pub favorites: Vec<Item>,
    pub loading: bool,
    /// Last fetch failure
    pub error: Option<String>,
    pub search_text: String,
    pub selected_categories: Vec<String>,
    /// Every category the remote catalog offers (loaded once)
    pub categories: Vec<String>,
    pub total_loaded: usize,
    pub has_more: bool,
    pub filtering: bool,
    /// Mount the scroll sentinel
    pub sentinel_active: bool,
    /// Offer "load more to search from"
    pub manual_load: bool,
    pub count_label: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a catalog snapshot into the store
pub fn sync_from_catalog(store: &AppStore, state: &CatalogState) {
    store.visible().set(state.filtered_items().cloned().collect());
    store.favorites().set(state.favorites().to_vec());
    store.loading().set(state.is_loading());
    store.error().set(state.error().map(str::to_string));
    store.search_text().set(state.search_text().to_string());
    store.selected_categories().set(state.selected_categories().iter().cloned().collect());
    store.total_loaded().set(state.items().len());
    store.has_more().set(state.has_more());
    store.filtering().set(state.is_filtering());
    store.sentinel_active().set(trigger::sentinel_active(state));
    store.manual_load().set(trigger::can_load_manually(state));
    store.count_label().set(view_model::listing_count_label(state));
}
