//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Hanzi Cards"</h1>
            <p class="muted">"中文 ⇄ English flashcards"</p>
        </header>
    }
}
