//! Error types for dispute-core

use thiserror::Error;

use crate::models::FormField;
use crate::util::compact_text;

/// Result type alias using dispute-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring clients or picking files
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host file picker failed
    #[error("File picker error: {0}")]
    Picker(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a single submit attempt did not succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Required fields were missing; nothing was sent.
    #[error("Missing required fields: {}", join_fields(missing))]
    Validation { missing: Vec<FormField> },

    /// The document could not be read or the intake service was unreachable.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The intake service answered with a non-success status.
    #[error("Intake service rejected the submission with HTTP {status}: {}", compact_text(body))]
    Rejected { status: u16, body: String },
}

impl SubmitError {
    /// HTTP status associated with this failure, if the server answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Validation { .. } | Self::Transport(_) => None,
        }
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
