//! Application state shared through the Dioxus context.

use std::sync::Arc;

use dioxus::prelude::*;
use dispute_core::{Alert, AttachmentSelector, HttpIntakeClient, SubmissionForm};

use crate::picker::PlatformPicker;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Name, email and attached file
    pub form: Signal<SubmissionForm>,
    /// Current selection shown by the attach control
    pub selector: Signal<AttachmentSelector>,
    /// Intake client, absent when it could not be constructed
    pub intake_client: Signal<Option<Arc<HttpIntakeClient>>>,
    /// Blocking alert waiting to be dismissed
    pub alert: Signal<Option<Alert>>,
    /// File picker selected for this host
    pub picker: PlatformPicker,
}
