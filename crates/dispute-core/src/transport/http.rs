//! `reqwest`-backed intake client.

use reqwest::multipart::{Form, Part};

use super::source::read_source;
use super::{IntakeResponse, IntakeTransport, MultipartPayload, PartBody};
use crate::config::IntakeConfig;
use crate::error::{Result, SubmitError};
use crate::models::FileReference;

/// HTTP client that posts dispute submissions to the intake endpoint.
#[derive(Debug, Clone)]
pub struct HttpIntakeClient {
    endpoint_url: String,
    client: reqwest::Client,
}

impl HttpIntakeClient {
    pub fn new(config: &IntakeConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            endpoint_url: config.endpoint_url().to_string(),
            client,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl IntakeTransport for HttpIntakeClient {
    async fn fetch_document(&self, file: &FileReference) -> std::result::Result<Vec<u8>, SubmitError> {
        read_source(&self.client, &file.source_uri).await
    }

    async fn post(
        &self,
        payload: MultipartPayload,
    ) -> std::result::Result<IntakeResponse, SubmitError> {
        let form = build_form(payload)?;
        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|error| SubmitError::Transport(format!("Submission request failed: {error}")))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(IntakeResponse { status, body })
    }
}

fn build_form(payload: MultipartPayload) -> std::result::Result<Form, SubmitError> {
    let mut form = Form::new();
    for part in payload.parts {
        form = match part.body {
            PartBody::Text(value) => form.text(part.name, value),
            PartBody::File {
                file_name,
                content_type,
                bytes,
            } => {
                let file_part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|error| {
                        SubmitError::Transport(format!(
                            "Invalid content type {content_type}: {error}"
                        ))
                    })?;
                form.part(part.name, file_part)
            }
        };
    }
    Ok(form)
}
