//! デッキ一覧コンポーネント

use leptos::html;
use leptos::prelude::*;
use crate::app::{run_command, CardForm};
use hanzi_cards_common::view::EMPTY_DECK_MESSAGE;
use hanzi_cards_common::{AppState, Command, DeckListView, DeckRow};

const CLEAR_ALL_PROMPT: &str = "Clear all cards? This cannot be undone.";

#[component]
pub fn DeckList(
    state: RwSignal<AppState>,
    form: CardForm,
    card_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let rows = Memo::new(move |_| state.with(DeckListView::project).rows);

    let on_clear_all = move |_| {
        if gloo::dialogs::confirm(CLEAR_ALL_PROMPT) {
            run_command(state, Command::ClearAll);
            form.reset();
            gloo::console::log!("deck cleared");
        }
    };

    view! {
        <section class="deck">
            <div class="deck-header">
                <h2>"Deck"</h2>
                <button class="btn btn-danger" on:click=on_clear_all>"Clear all"</button>
            </div>

            <Show
                when=move || !rows.with(|r| r.is_empty())
                fallback=|| view! { <div class="muted small">{EMPTY_DECK_MESSAGE}</div> }
            >
                <div class="deck-list">
                    <For
                        each=move || rows.get()
                        key=|row| (row.id.clone(), row.is_current)
                        children=move |row| view! {
                            <DeckItem row=row state=state form=form card_ref=card_ref />
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn DeckItem(
    row: DeckRow,
    state: RwSignal<AppState>,
    form: CardForm,
    card_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let on_study = {
        let id = row.id.clone();
        move |_| {
            run_command(state, Command::Study(id.clone()));
            if let Some(card) = card_ref.get_untracked() {
                card.scroll_into_view();
            }
        }
    };

    let on_edit = {
        let id = row.id.clone();
        move |_| {
            if let Some(draft) = run_command(state, Command::Edit(id.clone())).draft {
                form.fill(&draft);
            }
        }
    };

    let on_delete = {
        let id = row.id.clone();
        move |_| {
            run_command(state, Command::Delete(id.clone()));
        }
    };

    view! {
        <div class="deck-item" class:current=row.is_current>
            <div class="deck-main">
                // ユーザー入力はエスケープ済みのマークアップ
                <div class="deck-line" inner_html=row.chinese_line_html()></div>
                <div class="deck-line" inner_html=row.english_line_html()></div>
            </div>
            <div class="deck-actions">
                <button type="button" class="btn btn-ghost iconbtn" on:click=on_study>"Study"</button>
                <button type="button" class="btn btn-ghost iconbtn" on:click=on_edit>"Edit"</button>
                <button type="button" class="btn btn-danger iconbtn" on:click=on_delete>"Delete"</button>
            </div>
        </div>
    }
}
