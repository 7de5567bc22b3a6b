//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;
use dispute_core::{AttachmentSelector, HttpIntakeClient, SubmissionForm};

use crate::bootstrap_config::{load_bootstrap_config, runtime_intake_override};
use crate::components::{DisputeForm, OutcomeDialog};
use crate::picker::PlatformPicker;
use crate::state::AppState;

const APP_STYLES: &str = r#"
body {
    margin: 0;
    font-family: system-ui, -apple-system, sans-serif;
    background: #f9fafb;
    color: #111827;
}
.intake-container {
    max-width: 480px;
    margin: 32px auto;
    padding: 24px;
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 12px;
    display: flex;
    flex-direction: column;
    gap: 14px;
}
.intake-field { display: flex; flex-direction: column; gap: 6px; font-size: 13px; }
.intake-field input {
    border: 1px solid #d1d5db;
    border-radius: 8px;
    padding: 10px 12px;
    font-size: 14px;
}
.intake-button {
    border: 1px solid #111827;
    border-radius: 8px;
    padding: 10px 14px;
    font-size: 15px;
    font-weight: 600;
    cursor: pointer;
    background: #111827;
    color: #ffffff;
}
.intake-button[data-variant='outline'] { background: transparent; color: #111827; }
.attachment-name { margin: 8px 0 0 0; font-size: 13px; color: #374151; text-align: center; }
.toast-container { position: fixed; inset: auto 12px 12px 12px; z-index: 9999; pointer-events: none; }
.toast-list { margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 8px; }
.toast {
    pointer-events: auto;
    border-radius: 10px;
    border: 1px solid #d1d5db;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
    padding: 10px 12px;
    display: flex;
    gap: 10px;
    align-items: flex-start;
    white-space: pre-line;
}
.toast[data-type='success'] { border-color: #10b981; }
.toast[data-type='error'] { border-color: #ef4444; }
.toast[data-type='info'] { border-color: #3b82f6; }
.toast-content { flex: 1; }
.toast-title { font-size: 13px; font-weight: 700; }
.toast-description { font-size: 12px; color: #4b5563; margin-top: 2px; }
"#;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        ToastProvider {
            IntakeShell {}
        }
    }
}

#[component]
fn IntakeShell() -> Element {
    let form = use_signal(SubmissionForm::new);
    let selector = use_signal(AttachmentSelector::new);
    let alert = use_signal(|| None);
    let picker = use_hook(PlatformPicker::detect);
    let intake_client = use_signal(build_intake_client);

    use_context_provider(|| AppState {
        form,
        selector,
        intake_client,
        alert,
        picker,
    });

    rsx! {
        style { "{APP_STYLES}" }
        div {
            class: "intake-container",
            h2 { style: "margin: 0;", "Submit a dispute" }
            DisputeForm {}
        }
        OutcomeDialog {}
    }
}

fn build_intake_client() -> Option<Arc<HttpIntakeClient>> {
    let config = load_bootstrap_config().intake_config(runtime_intake_override());
    match HttpIntakeClient::new(&config) {
        Ok(client) => {
            tracing::info!("Posting disputes to {}", client.endpoint_url());
            Some(Arc::new(client))
        }
        Err(error) => {
            tracing::error!("Failed to initialize intake client: {}", error);
            None
        }
    }
}
