//! dispute-core - Core library for dispute intake
//!
//! This crate contains the attachment selection and submission logic shared by
//! the desktop and browser builds of the intake form. It has no UI dependency:
//! every operation returns a value the UI layer decides how to render.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod picker;
pub mod transport;
pub mod util;

pub use config::IntakeConfig;
pub use error::{Error, Result, SubmitError};
pub use form::{dispatch, FormState, SubmissionForm};
pub use models::{
    DisputeSubmission, FileOrigin, FileReference, FormField, SubmissionOutcome, TextField,
};
pub use notify::{Alert, Notification, NotificationKind};
pub use picker::{AttachmentSelector, FilePicker, PickOutcome};
pub use transport::{HttpIntakeClient, IntakeResponse, IntakeTransport, MultipartPayload};
