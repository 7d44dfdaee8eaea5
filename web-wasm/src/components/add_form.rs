//! カード追加フォームコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::translate::FetchTranslator;
use crate::app::{run_command, CardForm};
use hanzi_cards_common::translate::{AUTOFILL_BUSY_LABEL, AUTOFILL_LABEL, TRANSLATE_FAILED_MESSAGE};
use hanzi_cards_common::{plan_autofill, AppState, Command, FormField, Translator};

#[component]
pub fn AddForm(state: RwSignal<AppState>, form: CardForm) -> impl IntoView {
    let (is_translating, set_is_translating) = signal(false);
    let has_pending_edit = move || state.with(|s| s.pending_edit.is_some());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if run_command(state, Command::Add(form.draft())).changed() {
            form.reset();
        }
    };

    let on_cancel_edit = move |_| {
        run_command(state, Command::CancelEdit);
        form.reset();
    };

    // 片方だけ入力されていれば翻訳で埋める
    let on_autofill = move |_| {
        let Some(plan) = plan_autofill(&form.cn.get_untracked(), &form.en.get_untracked()) else {
            return;
        };
        let ticket = form.generation.try_update(|g| g.begin()).unwrap_or_default();
        set_is_translating.set(true);

        spawn_local(async move {
            match FetchTranslator::default().translate(&plan.text, plan.pair).await {
                Ok(translated) => {
                    if form.generation.with_untracked(|g| g.is_current(ticket)) {
                        match plan.target {
                            FormField::English => form.en.set(translated),
                            FormField::Chinese => form.cn.set(translated),
                        }
                    } else {
                        gloo::console::log!("discarding stale translation");
                    }
                }
                Err(e) => {
                    gloo::console::warn!(e.to_string());
                    gloo::dialogs::alert(TRANSLATE_FAILED_MESSAGE);
                }
            }
            set_is_translating.set(false);
        });
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <h2>{move || if has_pending_edit() { "Edit card" } else { "Add a card" }}</h2>
            <div class="form-grid">
                <div class="form-group">
                    <label for="cn-input">"中文"</label>
                    <input
                        type="text"
                        id="cn-input"
                        placeholder="你好"
                        node_ref=form.cn_ref
                        prop:value=move || form.cn.get()
                        on:input=move |ev| form.cn.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="en-input">"English"</label>
                    <input
                        type="text"
                        id="en-input"
                        placeholder="Hello"
                        prop:value=move || form.en.get()
                        on:input=move |ev| form.en.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="py-input">"Pinyin"</label>
                    <input
                        type="text"
                        id="py-input"
                        placeholder="nǐ hǎo"
                        prop:value=move || form.pinyin.get()
                        on:input=move |ev| form.pinyin.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="notes-input">"Notes"</label>
                    <input
                        type="text"
                        id="notes-input"
                        prop:value=move || form.notes.get()
                        on:input=move |ev| form.notes.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">
                    {move || if has_pending_edit() { "Save card" } else { "Add card" }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || is_translating.get()
                    on:click=on_autofill
                >
                    {move || if is_translating.get() { AUTOFILL_BUSY_LABEL } else { AUTOFILL_LABEL }}
                </button>
                <Show when=has_pending_edit>
                    <button type="button" class="btn btn-tertiary" on:click=on_cancel_edit>
                        "Cancel edit"
                    </button>
                </Show>
            </div>
        </form>
    }
}
