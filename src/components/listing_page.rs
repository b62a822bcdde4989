//! Listing Page Component
//!
//! Search, category filter and the paged grid. Scrolling pages in more items
//! until a filter is active; while filtering, a button loads more to search
//! from instead.

use catalog_core::view_model;
use leptos::prelude::*;

use crate::components::{CategoryFilter, ErrorMessage, ItemCard, LoadMoreSentinel, Loading, SearchBar};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListingPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // First visit fetches the first page
    Effect::new(move |_| ctx.ensure_loaded());

    let is_empty = move || store.visible().read().is_empty();
    let loading = move || store.loading().get();
    let failure = move || if loading() { None } else { store.error().get() };

    let empty_message = move || {
        let search = store.search_text().get();
        let has_categories = !store.selected_categories().read().is_empty();
        view_model::empty_filter_message(&search, has_categories)
    };

    view! {
        <div class="listing-page">
            <header class="page-header">
                <h1>
                    "Pokemon List"
                    <span class="page-count">{move || format!("({})", store.count_label().get())}</span>
                </h1>
                <SearchBar />
                <CategoryFilter />
            </header>

            {move || failure().map(|message| view! {
                <ErrorMessage message=message on_retry=Callback::new(move |_| ctx.retry()) />
            })}

            <div class="item-grid">
                <For
                    each=move || store.visible().get()
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>

            <Show when=move || loading() && is_empty()>
                <Loading label="Loading Pokemon..." />
            </Show>

            <Show when=move || !loading() && is_empty() && store.filtering().get() && failure().is_none()>
                <div class="empty-state">
                    <h3>"No Pokemon found"</h3>
                    <p>{empty_message}</p>
                    <Show when=move || !store.selected_categories().read().is_empty()>
                        <button class="link-btn" on:click=move |_| ctx.clear_categories()>"Clear type filter"</button>
                    </Show>
                </div>
            </Show>

            <Show when=move || store.sentinel_active().get()>
                <LoadMoreSentinel />
                <Show when=move || loading() && !is_empty()>
                    <Loading label="Loading more..." />
                </Show>
            </Show>

            <Show when=move || store.manual_load().get()>
                <div class="load-more">
                    <button class="load-more-btn" on:click=move |_| ctx.load_more()>
                        "Load more Pokemon to search from"
                    </button>
                </div>
            </Show>

            <Show when=move || !store.has_more().get() && !is_empty() && !store.filtering().get()>
                <p class="end-of-list">{move || view_model::end_of_list_message(store.visible().read().len())}</p>
            </Show>
        </div>
    }
}
