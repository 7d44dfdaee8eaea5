//! お問い合わせフォームコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use hanzi_cards_common::{validate_contact, ContactForm, ContactOutcome};

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(ContactOutcome::default());
    let success = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        success.set(String::new());

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let outcome = validate_contact(&form);
        if let Some(text) = outcome.success_message() {
            success.set(text.to_string());
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
        errors.set(outcome);
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <h2>"Contact"</h2>
            <div class="form-group">
                <label for="name-input">"Name"</label>
                <input
                    type="text"
                    id="name-input"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <div class="error">{move || errors.get().name_error.unwrap_or_default()}</div>
            </div>
            <div class="form-group">
                <label for="email-input">"Email"</label>
                <input
                    type="email"
                    id="email-input"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <div class="error">{move || errors.get().email_error.unwrap_or_default()}</div>
            </div>
            <div class="form-group">
                <label for="message-input">"Message"</label>
                <textarea
                    id="message-input"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <div class="error">{move || errors.get().message_error.unwrap_or_default()}</div>
            </div>
            <button type="submit" class="btn btn-primary">"Send"</button>
            <p class="success">{move || success.get()}</p>
        </form>
    }
}
