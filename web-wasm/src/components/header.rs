//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Image Analysis"</h1>
            <p class="card-subtitle">"Upload an image for webhook analysis"</p>
        </header>
    }
}
