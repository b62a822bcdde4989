//! Pokedex Frontend App
//!
//! Composition root: wires storage, the remote client and the catalog
//! together, then switches views on the hash route.

use std::rc::Rc;

use catalog_core::{Catalog, CatalogConfig, FetchOrchestrator, HttpCatalogClient, JsonFavoritesStore};
use leptos::prelude::*;
use log::{info, warn};
use reactive_stores::Store;

use crate::components::{DetailPage, FavoritesPage, HomePage, ListingPage, NavBar};
use crate::context::AppContext;
use crate::route::{use_hash_route, Route};
use crate::storage::BrowserStorage;
use crate::store::{sync_from_catalog, AppState, AppStore};

/// Defaults overridden at build time by `POKEDEX_API_URL` / `POKEDEX_PAGE_SIZE`
fn app_config() -> CatalogConfig {
    let defaults = CatalogConfig::default();
    defaults
        .clone()
        .with_overrides(option_env!("POKEDEX_API_URL"), option_env!("POKEDEX_PAGE_SIZE"))
        .unwrap_or_else(|e| {
            warn!("Ignoring invalid build configuration: {}", e);
            defaults
        })
}

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    info!("catalog at {} (page size {})", config.api_base_url, config.page_size);

    let favorites = JsonFavoritesStore::new(BrowserStorage, config.favorites_key.clone());
    let catalog = Catalog::open(Rc::new(favorites));
    let orchestrator = FetchOrchestrator::new(HttpCatalogClient::from_config(&config), config.page_size);

    let store: AppStore = Store::new(AppState::default());
    catalog.with_state(|state| sync_from_catalog(&store, state));
    catalog.subscribe(move |state| sync_from_catalog(&store, state));

    provide_context(store);
    provide_context(AppContext::new(catalog, orchestrator, store));

    let route = use_hash_route();

    view! {
        <div class="app-layout">
            <NavBar route=route />
            <main class="main-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::List => view! { <ListingPage /> }.into_any(),
                    Route::Detail(key) => view! { <DetailPage detail_key=key /> }.into_any(),
                    Route::Favorites => view! { <FavoritesPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
