//! Navigation Bar Component

use leptos::prelude::*;

use crate::route::Route;

/// Top navigation; highlights the active section
#[component]
pub fn NavBar(route: ReadSignal<Route>) -> impl IntoView {
    let links = [
        (Route::Home, "Home"),
        (Route::List, "Pokemon"),
        (Route::Favorites, "Favorites"),
    ];

    view! {
        <nav class="nav-bar">
            <a href=Route::Home.href() class="nav-brand">"PokeDex"</a>
            <div class="nav-links">
                {links.into_iter().map(|(target, label)| {
                    let href = target.href();
                    let link_class = move || {
                        let active = match (&route.get(), &target) {
                            // Detail pages belong to the listing section
                            (Route::Detail(_), Route::List) => true,
                            (current, target) => current == target,
                        };
                        if active { "nav-link active" } else { "nav-link" }
                    };
                    view! { <a href=href class=link_class>{label}</a> }
                }).collect_view()}
            </div>
        </nav>
    }
}
