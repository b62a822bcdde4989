//! Application Context
//!
//! Catalog actions provided via Leptos Context API. The catalog and the
//! orchestrator are single-threaded, so they live in local arena storage and
//! the context itself stays `Copy`.

use std::rc::Rc;

use catalog_core::{trigger, Catalog, DetailKey, DetailState, FetchOrchestrator, HttpCatalogClient, Item, LoadOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};

use crate::store::{AppStateStoreFields, AppStore};

type Orchestrator = FetchOrchestrator<HttpCatalogClient>;

#[derive(Clone, Copy)]
pub struct AppContext {
    catalog: StoredValue<Catalog, LocalStorage>,
    orchestrator: StoredValue<Rc<Orchestrator>, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    pub fn new(catalog: Catalog, orchestrator: Orchestrator, store: AppStore) -> Self {
        Self {
            catalog: StoredValue::new_local(catalog),
            orchestrator: StoredValue::new_local(Rc::new(orchestrator)),
            store,
        }
    }

    /// Fetch the next page; no-op while loading or exhausted
    pub fn load_more(&self) {
        let catalog = self.catalog.get_value();
        let orchestrator = self.orchestrator.get_value();
        spawn_local(async move {
            match orchestrator.load_next_page(&catalog).await {
                Ok(LoadOutcome::Appended { added, .. }) => debug!("appended {} items", added),
                Ok(outcome) => debug!("load more: {:?}", outcome),
                Err(e) => warn!("load more failed: {}", e),
            }
        });
    }

    /// Load the first page if nothing has been fetched yet
    pub fn ensure_loaded(&self) {
        let untouched = self
            .catalog
            .with_value(|c| c.with_state(|s| s.offset() == 0 && s.has_more() && s.error().is_none()));
        if untouched {
            self.load_more();
        }
    }

    /// Re-request the failed page; starts over when nothing is loaded
    pub fn retry(&self) {
        let catalog = self.catalog.get_value();
        let orchestrator = self.orchestrator.get_value();
        spawn_local(async move {
            if let Err(e) = orchestrator.retry(&catalog).await {
                warn!("retry failed: {}", e);
            }
        });
    }

    /// Called by the scroll sentinel whenever it enters the viewport
    pub fn on_sentinel_visible(&self) {
        let fire = self.catalog.with_value(|c| c.with_state(|s| trigger::should_auto_load(s, true)));
        if fire {
            self.load_more();
        }
    }

    pub fn set_search(&self, text: String) {
        self.catalog.with_value(|c| c.set_search_text(text));
    }

    pub fn toggle_category(&self, label: String) {
        self.catalog.with_value(|c| c.toggle_category(label));
    }

    pub fn clear_categories(&self) {
        self.catalog.with_value(|c| c.clear_categories());
    }

    pub fn toggle_favorite(&self, item: Item) {
        self.catalog.with_value(|c| c.toggle_favorite(item));
    }

    /// Fill the category list once; failures leave it empty
    pub fn load_categories(&self) {
        let store = self.store;
        if !store.categories().read_untracked().is_empty() {
            return;
        }
        let orchestrator = self.orchestrator.get_value();
        spawn_local(async move {
            match orchestrator.categories().await {
                Ok(labels) => store.categories().set(labels),
                Err(e) => warn!("Failed to load categories: {}", e),
            }
        });
    }

    /// Resolve one item for the detail view into `set_detail`
    pub fn load_detail(&self, key: DetailKey, set_detail: WriteSignal<DetailState>) {
        set_detail.set(DetailState::Loading);
        let orchestrator = self.orchestrator.get_value();
        spawn_local(async move {
            let state = orchestrator.detail(&key).await;
            set_detail.set(state);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
