//! Error Message Component

use leptos::prelude::*;

/// Failure notice with a retry button
#[component]
pub fn ErrorMessage(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-message">
            <p class="error-title">"Something went wrong"</p>
            <p class="error-detail">{message}</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>"Try Again"</button>
        </div>
    }
}
