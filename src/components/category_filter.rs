//! Category Filter Component
//!
//! Chips for every category the remote catalog offers. Selecting several
//! shows items carrying any of them.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| ctx.load_categories());

    let selected_count = move || store.selected_categories().read().len();

    view! {
        <div class="category-filter">
            <div class="category-filter-header">
                <span>"Filter by Type"</span>
                <Show when=move || { selected_count() > 0 }>
                    <button class="category-clear" on:click=move |_| ctx.clear_categories()>
                        {move || format!("Clear ({})", selected_count())}
                    </button>
                </Show>
            </div>
            <div class="category-chips">
                <For
                    each=move || store.categories().get()
                    key=|label| label.clone()
                    children=move |label| {
                        let chip_label = label.clone();
                        let is_selected = move || store.selected_categories().read().contains(&chip_label);
                        let chip_class = {
                            let label = label.clone();
                            move || {
                                if is_selected() {
                                    format!("category-chip type-{} selected", label)
                                } else {
                                    format!("category-chip type-{}", label)
                                }
                            }
                        };
                        let toggled = label.clone();
                        view! {
                            <button class=chip_class on:click=move |_| ctx.toggle_category(toggled.clone())>
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
