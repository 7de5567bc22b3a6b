//! Intake form: name, email, attachment and submit.

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use dispute_core::{
    dispatch, Alert, FileReference, FormState, Notification, NotificationKind, SubmissionOutcome,
    SubmitError, TextField,
};

use super::AttachInputField;
use crate::state::AppState;

#[component]
pub fn DisputeForm() -> Element {
    let state = use_context::<AppState>();
    let form = state.form;
    let selector = state.selector;
    let alert = state.alert;
    let intake_client = state.intake_client;
    let toasts = use_toast();

    let notify = move |notification: &Notification| {
        let options = ToastOptions::new().description(notification.description.clone());
        let title = notification.title.clone();
        match notification.kind {
            NotificationKind::Info => toasts.info(title, options),
            NotificationKind::Success => toasts.success(title, options),
            NotificationKind::Error => toasts.error(title, options),
        }
    };

    // Every press dispatches its own request; an in-flight submit does not block another.
    let on_submit = move |_| {
        let mut form = form;
        let mut selector = selector;
        let mut alert = alert;

        let submission = match form.write().begin_submit() {
            Ok(submission) => submission,
            Err(error) => {
                alert.set(Some(Alert::for_outcome(&SubmissionOutcome::Failure(error))));
                return;
            }
        };

        let Some(client) = intake_client.read().clone() else {
            let outcome = SubmissionOutcome::Failure(SubmitError::Transport(
                "The intake service is not configured.".to_string(),
            ));
            form.write().complete(&outcome);
            if let Some(notification) = Notification::for_outcome(&outcome) {
                notify(&notification);
            }
            alert.set(Some(Alert::for_outcome(&outcome)));
            return;
        };

        if let Ok(preview) = submission.preview_json() {
            tracing::debug!("Dispute preview: {}", preview);
        }
        notify(&Notification::preview(&submission));

        spawn(async move {
            let outcome = dispatch(client.as_ref(), submission).await;
            form.write().complete(&outcome);
            if outcome.is_success() {
                selector.write().clear();
            }
            if let Some(notification) = Notification::for_outcome(&outcome) {
                notify(&notification);
            }
            alert.set(Some(Alert::for_outcome(&outcome)));
        });
    };

    let on_file_selected = move |file: FileReference| {
        let mut form = form;
        form.write().attach_file(file);
    };

    let name = form.read().name().to_string();
    let email = form.read().email().to_string();
    let submitting = form.read().state() == FormState::Submitting;

    rsx! {
        label {
            class: "intake-field",
            "Name"
            input {
                r#type: "text",
                placeholder: "Your name",
                value: "{name}",
                oninput: move |evt: Event<FormData>| {
                    let mut form = form;
                    form.write().update_field(TextField::Name, evt.value());
                },
            }
        }
        label {
            class: "intake-field",
            "Email"
            input {
                r#type: "email",
                placeholder: "you@example.com",
                value: "{email}",
                oninput: move |evt: Event<FormData>| {
                    let mut form = form;
                    form.write().update_field(TextField::Email, evt.value());
                },
            }
        }
        AttachInputField { on_file_selected }
        button {
            class: "intake-button",
            r#type: "button",
            onclick: on_submit,
            if submitting { "Submitting..." } else { "Submit" }
        }
    }
}
