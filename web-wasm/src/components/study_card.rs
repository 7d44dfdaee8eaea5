//! 学習カードコンポーネント

use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;
use crate::app::run_command;
use hanzi_cards_common::{AppState, Command, StudyKey, StudyView};

#[component]
pub fn StudyCard(
    state: RwSignal<AppState>,
    card_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let card_view = Memo::new(move |_| state.with(StudyView::project));

    let on_keydown = move |ev: KeyboardEvent| {
        let command = match StudyKey::from_key(&ev.key()) {
            Some(StudyKey::Flip) => {
                ev.prevent_default();
                Command::Flip
            }
            Some(StudyKey::Next) => Command::Next,
            Some(StudyKey::Prev) => Command::Prev,
            None => return,
        };
        run_command(state, command);
    };

    view! {
        <section class="study">
            <div class="study-header">
                <span class="count-label">{move || card_view.get().count_label}</span>
            </div>

            <div
                class="flashcard"
                class:flipped=move || card_view.get().flipped
                tabindex="0"
                node_ref=card_ref
                on:click=move |_| { run_command(state, Command::Flip); }
                on:keydown=on_keydown
            >
                <div class="face front">
                    <span class="tag">{move || card_view.get().front_tag}</span>
                    <div class="main-text">{move || card_view.get().front_text}</div>
                    <div class="sub-text">{move || card_view.get().front_sub}</div>
                </div>
                <div class="face back">
                    <span class="tag">{move || card_view.get().back_tag}</span>
                    <div class="main-text">{move || card_view.get().back_text}</div>
                    <div class="sub-text">{move || card_view.get().back_sub}</div>
                </div>
            </div>

            <div class="study-controls">
                <button class="btn btn-ghost" on:click=move |_| { run_command(state, Command::Prev); }>
                    "← Prev"
                </button>
                <button class="btn btn-ghost" on:click=move |_| { run_command(state, Command::Next); }>
                    "Next →"
                </button>
                <button class="btn btn-secondary" on:click=move |_| { run_command(state, Command::Shuffle); }>
                    "Shuffle"
                </button>
                <button class="btn btn-secondary" on:click=move |_| { run_command(state, Command::SwapDirection); }>
                    "Swap direction"
                </button>
                <button class="btn btn-secondary" on:click=move |_| { run_command(state, Command::TogglePinyin); }>
                    {move || if state.with(|s| s.settings.show_pinyin) { "Hide pinyin" } else { "Show pinyin" }}
                </button>
                <button
                    class="btn btn-danger"
                    disabled=move || card_view.get().is_empty
                    on:click=move |_| { run_command(state, Command::DeleteCurrent); }
                >
                    "Delete current"
                </button>
            </div>
        </section>
    }
}
