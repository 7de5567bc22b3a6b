//! Data models for dispute intake

mod file_reference;
mod submission;

pub use file_reference::{FileOrigin, FileReference, DEFAULT_UPLOAD_NAME};
pub use submission::{DisputeSubmission, FormField, SubmissionOutcome, TextField};
