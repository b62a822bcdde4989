//! Item Card Component

use catalog_core::{DetailKey, Item};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{use_app_store, AppStateStoreFields};

/// Grid card linking to the detail view, with a favorite toggle
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let href = Route::Detail(DetailKey::Id(id)).href();
    let card_class = format!("item-card type-{}", item.main_category());
    let image = item.image_url().map(str::to_string);
    let is_favorite = move || store.favorites().read().iter().any(|f| f.id == id);

    let on_favorite = {
        let item = item.clone();
        move |ev: web_sys::MouseEvent| {
            // The card itself is a link
            ev.prevent_default();
            ev.stop_propagation();
            ctx.toggle_favorite(item.clone());
        }
    };

    view! {
        <a href=href class=card_class>
            <button
                class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                on:click=on_favorite
            >
                {move || if is_favorite() { "♥" } else { "♡" }}
            </button>
            <span class="item-number">{item.display_number()}</span>
            {match image {
                Some(src) => view! { <img class="item-image" src=src alt=item.name.clone() /> }.into_any(),
                None => view! { <div class="item-image placeholder"></div> }.into_any(),
            }}
            <h3 class="item-name">{item.name.clone()}</h3>
            <div class="item-categories">
                {item.category_names().map(|name| {
                    view! { <span class=format!("category-badge type-{}", name)>{name.to_string()}</span> }
                }).collect_view()}
            </div>
        </a>
    }
}
