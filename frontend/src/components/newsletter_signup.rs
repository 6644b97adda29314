//! Newsletter form. There is no subscription backend; submitting only
//! acknowledges the address.

use common::ui_text::UiText;
use dioxus::prelude::*;
use dioxus::logger::tracing::info;

#[component]
pub fn NewsletterSignup(text: &'static UiText) -> Element {
    let mut email = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    rsx! {
        form {
            class: "x-newsletter",
            style: "display:flex; flex-direction: column; gap: 12px; max-width: 360px;",
            onsubmit: move |e| {
                e.prevent_default();
                if email.read().trim().contains('@') {
                    info!("newsletter signup submitted");
                    submitted.set(true);
                    email.set(String::new());
                }
            },
            span { style: "font-weight: 600;", "{text.newsletter_title}" }
            div {
                style: "display:flex; flex-direction: row; gap: 8px;",
                input {
                    r#type: "email",
                    required: true,
                    placeholder: "{text.email_placeholder}",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                    style: "flex:1; padding: 8px 12px; border-radius: 6px; border: none;",
                }
                button { class: "x-button", r#type: "submit", "{text.subscribe}" }
            }
            if submitted() {
                span { style: "font-size: 14px;", "✓" }
            }
        }
    }
}
