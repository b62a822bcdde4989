//! Hash Router
//!
//! Four views addressed by `location.hash`: `#/`, `#/pokemon`,
//! `#/pokemon/{id|name}` and `#/favorites`.

use catalog_core::DetailKey;
use gloo::events::EventListener;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    Detail(DetailKey),
    Favorites,
}

impl Route {
    /// Unknown paths fall back to Home
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (Some("pokemon"), None, None) => Route::List,
            (Some("pokemon"), Some(segment), None) => {
                DetailKey::parse(segment).map(Route::Detail).unwrap_or(Route::List)
            }
            (Some("favorites"), None, None) => Route::Favorites,
            _ => Route::Home,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::List => "#/pokemon".to_string(),
            Route::Detail(key) => format!("#/pokemon/{}", key),
            Route::Favorites => "#/favorites".to_string(),
        }
    }

    fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

/// Route signal kept in sync with `hashchange`
pub fn use_hash_route() -> ReadSignal<Route> {
    let (route, set_route) = signal(Route::current());

    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "hashchange", move |_| {
            let next = Route::current();
            log::debug!("route -> {:?}", next);
            set_route.set(next);
        });
        // Removed when the owning view is disposed
        StoredValue::new_local(listener);
    }

    route
}
