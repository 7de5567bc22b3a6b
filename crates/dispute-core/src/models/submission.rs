//! Submission models

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FileReference;
use crate::error::SubmitError;

/// Editable text fields of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Email,
}

/// Every field a submission requires, used to report what is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Document,
}

impl FormField {
    /// Lowercase label used in validation messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Document => "document",
        }
    }
}

impl From<TextField> for FormField {
    fn from(value: TextField) -> Self {
        match value {
            TextField::Name => Self::Name,
            TextField::Email => Self::Email,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the form taken when a submit attempt is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeSubmission {
    pub submitter_name: String,
    pub submitter_email: String,
    pub file: FileReference,
}

#[derive(Serialize)]
struct SubmissionPreview<'a> {
    name: &'a str,
    email: &'a str,
    document: DocumentPreview<'a>,
}

#[derive(Serialize)]
struct DocumentPreview<'a> {
    name: &'a str,
    size_bytes: Option<u64>,
    origin: super::FileOrigin,
}

impl DisputeSubmission {
    /// JSON echo of the submitted values, without the document's bytes.
    pub fn preview_json(&self) -> crate::Result<String> {
        let preview = SubmissionPreview {
            name: &self.submitter_name,
            email: &self.submitter_email,
            document: DocumentPreview {
                name: self.file.upload_name(),
                size_bytes: self.file.size_bytes,
                origin: self.file.origin,
            },
        };
        Ok(serde_json::to_string_pretty(&preview)?)
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The intake service answered with a 2xx status.
    Success { status: u16 },
    /// The attempt failed before, during, or after the request.
    Failure(SubmitError),
}

impl SubmissionOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// HTTP status of the response, when the server answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status } => Some(*status),
            Self::Failure(error) => error.status(),
        }
    }
}

impl From<SubmitError> for SubmissionOutcome {
    fn from(value: SubmitError) -> Self {
        Self::Failure(value)
    }
}
