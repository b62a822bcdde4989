//! Detail Page Component
//!
//! Single item by id or name. Loads independently of the listing, so its
//! failures never touch the collection.

use catalog_core::{view_model, DetailKey, DetailState, Item};
use leptos::prelude::*;

use crate::components::{ErrorMessage, Loading};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

#[component]
pub fn DetailPage(detail_key: DetailKey) -> impl IntoView {
    let ctx = use_app_context();
    let (detail, set_detail) = signal(DetailState::Loading);
    let key = StoredValue::new(detail_key);

    Effect::new(move |_| ctx.load_detail(key.get_value(), set_detail));

    move || match detail.get() {
        DetailState::Loading => view! { <Loading label="Loading Pokemon details..." /> }.into_any(),
        DetailState::Failed(message) => view! {
            <div class="detail-error">
                <ErrorMessage
                    message=message
                    on_retry=Callback::new(move |_| ctx.load_detail(key.get_value(), set_detail))
                />
                <button class="back-btn wide" on:click=move |_| go_back()>"Go Back"</button>
            </div>
        }
        .into_any(),
        DetailState::Ready(item) => view! { <ItemDetail item=item /> }.into_any(),
    }
}

#[component]
fn ItemDetail(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let is_favorite = move || store.favorites().read().iter().any(|f| f.id == id);
    let total = item.stat_total();
    let header_class = format!("detail-header type-{}", item.main_category());
    let toggled = item.clone();

    view! {
        <div class="detail-page">
            <div class=header_class>
                <div class="detail-actions">
                    <button class="back-btn" title="Back" on:click=move |_| go_back()>"←"</button>
                    <button
                        class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                        on:click=move |_| ctx.toggle_favorite(toggled.clone())
                    >
                        {move || if is_favorite() { "♥" } else { "♡" }}
                    </button>
                </div>
                <span class="item-number">{item.display_number()}</span>
                <h1 class="item-name">{item.name.clone()}</h1>
                <div class="item-categories">
                    {item.category_names().map(|name| {
                        view! { <span class=format!("category-badge type-{}", name)>{name.to_string()}</span> }
                    }).collect_view()}
                </div>
            </div>

            {item.image_url().map(|src| view! {
                <img class="detail-image" src=src.to_string() alt=item.name.clone() />
            })}

            <section class="detail-body">
                <div class="measurements">
                    <div class="measurement">
                        <span>"Weight"</span>
                        <p>{format!("{:.1} kg", item.weight_kg())}</p>
                    </div>
                    <div class="measurement">
                        <span>"Height"</span>
                        <p>{format!("{:.1} m", item.height_meters())}</p>
                    </div>
                </div>

                <h2>"Base Stats"</h2>
                <div class="stats">
                    {item.stats.iter().map(|stat| view! {
                        <div class="stat-row">
                            <span class="stat-label">{view_model::stat_label(&stat.name).to_string()}</span>
                            <span class="stat-value">{stat.base_value}</span>
                            <div class="stat-bar">
                                <div
                                    class=format!("stat-fill stat-{}", stat.name)
                                    style=format!("width: {}%", view_model::stat_percent(stat.base_value))
                                ></div>
                            </div>
                        </div>
                    }).collect_view()}
                    <div class="stat-row total">
                        <span class="stat-label">"Total"</span>
                        <span class="stat-value">{total}</span>
                        <div class="stat-bar">
                            <div class="stat-fill" style=format!("width: {}%", view_model::total_percent(total))></div>
                        </div>
                    </div>
                </div>

                <h2>"Abilities"</h2>
                <div class="abilities">
                    {item.abilities.iter().map(|ability| {
                        let ability_class = if ability.hidden { "ability hidden" } else { "ability" };
                        view! {
                            <span class=ability_class>
                                {view_model::ability_label(&ability.name)}
                                {ability.hidden.then_some(" (Hidden)")}
                            </span>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
