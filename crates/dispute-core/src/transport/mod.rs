//! Intake transport.
//!
//! The submission flow only talks to [`IntakeTransport`]; the production
//! implementation is [`HttpIntakeClient`].

mod http;
mod source;

pub use http::HttpIntakeClient;

use crate::error::SubmitError;
use crate::models::{DisputeSubmission, FileReference};

/// Multipart field carrying the submitter's name.
pub const NAME_PART: &str = "name";
/// Multipart field carrying the submitter's email.
pub const EMAIL_PART: &str = "email";
/// Multipart field carrying the attached document.
pub const DOCUMENT_PART: &str = "document";

/// Status and text body of an intake response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeResponse {
    pub status: u16,
    pub body: String,
}

impl IntakeResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Body of one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// One named part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub body: PartBody,
}

/// Transport-agnostic multipart body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    pub parts: Vec<FormPart>,
}

impl MultipartPayload {
    /// Build the `name`, `email` and `document` parts for a submission.
    pub fn for_submission(submission: &DisputeSubmission, document: Vec<u8>) -> Self {
        Self::default()
            .text(NAME_PART, &submission.submitter_name)
            .text(EMAIL_PART, &submission.submitter_email)
            .file(DOCUMENT_PART, &submission.file, document)
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            body: PartBody::Text(value.to_string()),
        });
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, file: &FileReference, bytes: Vec<u8>) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            body: PartBody::File {
                file_name: file.upload_name().to_string(),
                content_type: file.content_type(),
                bytes,
            },
        });
        self
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|part| part.name == name)
    }

    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }
}

/// Moves a submission to the intake service.
#[allow(async_fn_in_trait)]
pub trait IntakeTransport {
    /// Read the bytes behind the reference's `source_uri`.
    async fn fetch_document(&self, file: &FileReference) -> Result<Vec<u8>, SubmitError>;

    /// POST the payload once.
    ///
    /// Any HTTP response is `Ok`; only a failure to exchange the request is
    /// an error.
    async fn post(&self, payload: MultipartPayload) -> Result<IntakeResponse, SubmitError>;
}
