use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
            <p>{label.unwrap_or_else(|| "Loading...".to_string())}</p>
        </div>
    }
}
