//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Name search over the loaded collection
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search Pokemon..."
                prop:value=move || store.search_text().get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
            <Show when=move || !store.search_text().get().is_empty()>
                <button class="search-clear" on:click=move |_| ctx.set_search(String::new())>"×"</button>
            </Show>
        </div>
    }
}
