use leptos::prelude::*;

use crate::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"PokeDex"</h1>
            <p>"Explore the world of Pokemon"</p>
            <a href=Route::List.href() class="start-btn">"Start Exploring"</a>
        </div>
    }
}
