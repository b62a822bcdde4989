//! Load-More Trigger
//!
//! Decides whether a visible scroll sentinel should fetch the next page.
//! Automatic paging is suppressed while a search or category filter is
//! active; the manual "load more" control covers that case.

use crate::state::CatalogState;

/// Sentinel visible, no filtering, more remains, nothing in flight
pub fn should_auto_load(state: &CatalogState, sentinel_visible: bool) -> bool {
    sentinel_visible
        && state.search_text().is_empty()
        && state.selected_categories().is_empty()
        && state.has_more()
        && !state.is_loading()
}

/// Whether to offer "load more to search from" while filtering
pub fn can_load_manually(state: &CatalogState) -> bool {
    state.is_filtering() && state.has_more() && !state.is_loading()
}

/// Whether the scroll sentinel should be mounted at all
pub fn sentinel_active(state: &CatalogState) -> bool {
    !state.is_filtering() && state.has_more()
}
