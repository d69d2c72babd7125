//! 解析中インジケーター

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" />
            <p class="loading-text">"Analyzing your bill…"</p>
            <p class="text-muted">"This will only take a moment"</p>
        </div>
    }
}
