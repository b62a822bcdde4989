//! Load More Sentinel Component
//!
//! Invisible marker below the grid. An IntersectionObserver tracks whether it
//! is on screen; the context decides whether that warrants a fetch. A page
//! that leaves the marker visible triggers the next check itself, since the
//! observer only reports transitions.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

struct ObserverHandle {
    observer: IntersectionObserver,
    // Dropping the closure would invalidate the observer callback
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[component]
pub fn LoadMoreSentinel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (visible, set_visible) = signal(false);
    let sentinel = NodeRef::<Div>::new();
    let handle = StoredValue::new_local(None::<ObserverHandle>);

    Effect::new(move |_| {
        let Some(element) = sentinel.get() else {
            return;
        };
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                let _ = set_visible.try_set(visible);
            },
        );

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&element);
                handle.set_value(Some(ObserverHandle { observer, _callback: callback }));
            }
            Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
        }
    });

    Effect::new(move |_| {
        let _ = store.total_loaded().get();
        let _ = store.has_more().get();
        if visible.get() {
            ctx.on_sentinel_visible();
        }
    });

    on_cleanup(move || {
        let _ = handle.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.observer.disconnect();
            }
        });
    });

    view! { <div class="load-more-sentinel" node_ref=sentinel></div> }
}
