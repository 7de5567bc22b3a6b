//! Blocking alert shown after a submit attempt.

use dioxus::prelude::*;
use dioxus_primitives::dialog::{DialogContent, DialogDescription, DialogRoot, DialogTitle};
use dispute_core::{Alert, SubmissionForm};

use crate::state::AppState;

#[component]
pub fn OutcomeDialog() -> Element {
    let state = use_context::<AppState>();
    let alert = state.alert;
    let form = state.form;

    let current = alert();
    let open = current.is_some();
    let (title, message) = current
        .map(|alert| (alert.title, alert.message))
        .unwrap_or_default();

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    dismiss(alert, form);
                }
            },
            DialogContent {
                style: "width: min(420px, 92vw); text-align: left;",
                DialogTitle { "{title}" }
                DialogDescription {
                    style: "white-space: pre-line;",
                    "{message}"
                }
                div {
                    style: "display: flex; justify-content: flex-end; margin-top: 16px;",
                    button {
                        class: "intake-button",
                        r#type: "button",
                        onclick: move |_| dismiss(alert, form),
                        "OK"
                    }
                }
            }
        }
    }
}

fn dismiss(mut alert: Signal<Option<Alert>>, mut form: Signal<SubmissionForm>) {
    alert.set(None);
    form.write().acknowledge();
}
