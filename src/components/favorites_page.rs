//! Favorites Page Component
//!
//! Renders the stored favorites as they were saved; no fetch involved.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::route::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let store = use_app_store();
    let count = move || store.favorites().read().len();

    view! {
        <div class="favorites-page">
            <header class="page-header">
                <h1>
                    "My Favorites"
                    <span class="page-count">{move || format!("({} Pokemon)", count())}</span>
                </h1>
            </header>

            <Show
                when=move || { count() > 0 }
                fallback=|| view! {
                    <div class="empty-state">
                        <h3>"No favorites yet"</h3>
                        <p>"Start exploring Pokemon and tap the heart icon to add them to your favorites!"</p>
                        <a href=Route::List.href() class="start-btn">"Explore Pokemon"</a>
                    </div>
                }
            >
                <div class="item-grid">
                    <For
                        each=move || store.favorites().get()
                        key=|item| item.id
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>
        </div>
    }
}
