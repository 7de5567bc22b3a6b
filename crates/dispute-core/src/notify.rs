//! User-facing messages derived from submission values.
//!
//! The core never displays anything. The app turns a [`Notification`] into a
//! transient toast and an [`Alert`] into a blocking dialog.

use crate::error::SubmitError;
use crate::models::{DisputeSubmission, SubmissionOutcome};
use crate::util::{compact_text, format_size};

/// Visual tone of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Transient, non-blocking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

/// Blocking dialog that waits for the user to dismiss it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }

    /// Echo of what is about to be sent, for operator visibility.
    pub fn preview(submission: &DisputeSubmission) -> Self {
        let size = submission
            .file
            .size_bytes
            .map(|bytes| format!(" ({})", format_size(bytes)))
            .unwrap_or_default();
        Self::new(
            NotificationKind::Info,
            "Submitting dispute",
            format!(
                "Name: {}\nEmail: {}\nDocument: {}{size}",
                submission.submitter_name,
                submission.submitter_email,
                submission.file.upload_name()
            ),
        )
    }

    /// Toast for a finished attempt.
    ///
    /// Validation failures have no toast; they are reported by the alert.
    pub fn for_outcome(outcome: &SubmissionOutcome) -> Option<Self> {
        match outcome {
            SubmissionOutcome::Success { status } => Some(Self::new(
                NotificationKind::Success,
                "Dispute submitted",
                format!("Server responded with status {status}"),
            )),
            SubmissionOutcome::Failure(SubmitError::Validation { .. }) => None,
            SubmissionOutcome::Failure(SubmitError::Rejected { status, body }) => Some(Self::new(
                NotificationKind::Error,
                "Submission failed",
                format!("Status {status}: {}", compact_text(body)),
            )),
            SubmissionOutcome::Failure(SubmitError::Transport(message)) => Some(Self::new(
                NotificationKind::Error,
                "Submission error",
                format!("An error occurred while submitting the form: {}", compact_text(message)),
            )),
        }
    }
}

impl Alert {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// Blocking confirmation for a finished or refused attempt.
    pub fn for_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success { .. } => {
                Self::new("Success", "Your dispute has been submitted.")
            }
            SubmissionOutcome::Failure(SubmitError::Validation { missing }) => Self::new(
                "Missing information",
                format!(
                    "Please provide {} before submitting.",
                    missing
                        .iter()
                        .map(|field| field.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ),
            SubmissionOutcome::Failure(_) => Self::new(
                "Error",
                "Failed to submit the dispute. Your entries were kept so you can try again.",
            ),
        }
    }
}
