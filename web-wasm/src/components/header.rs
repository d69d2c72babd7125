//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-badge">"⚡"</div>
            <h1>"💡 Smart Bill Checker"</h1>
            <p class="text-muted">"Upload your electricity bill and get instant, detailed analysis"</p>
        </header>
    }
}
