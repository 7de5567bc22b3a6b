//! Intake endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Intake endpoint used when nothing else is configured.
pub const DEFAULT_INTAKE_URL: &str = "http://localhost:8000/api/dispute";

/// Where dispute submissions are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    endpoint_url: String,
}

impl IntakeConfig {
    /// Validate and normalize an explicit endpoint URL.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self> {
        let endpoint_url = normalize_endpoint_url(endpoint_url.into().as_str())?;
        Ok(Self { endpoint_url })
    }

    /// Use `endpoint_url` when it is set and valid, the default otherwise.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_optional(endpoint_url: Option<String>) -> Self {
        let Some(endpoint_url) = normalize_text_option(endpoint_url) else {
            return Self::default();
        };
        Self::new(endpoint_url).unwrap_or_else(|error| {
            tracing::warn!("Ignoring intake endpoint override: {}", error);
            Self::default()
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_INTAKE_URL.to_string(),
        }
    }
}

fn normalize_endpoint_url(raw: &str) -> Result<String> {
    let endpoint = raw.trim().trim_end_matches('/').to_string();
    if endpoint.is_empty() {
        return Err(Error::Config("intake URL must not be empty".to_string()));
    }
    if !is_http_url(&endpoint) {
        return Err(Error::Config(
            "intake URL must include http:// or https://".to_string(),
        ));
    }
    url::Url::parse(&endpoint)
        .map_err(|error| Error::Config(format!("invalid intake URL: {error}")))?;
    Ok(endpoint)
}
