//! Submission form state machine.
//!
//! The form moves through `Editing -> Validating -> Submitting ->
//! (Succeeded | Failed) -> Editing`. Network work happens in [`dispatch`],
//! which borrows nothing from the form, so a UI can release its lock on the
//! form while the request is in flight and apply the outcome afterwards with
//! [`SubmissionForm::complete`].

use crate::error::SubmitError;
use crate::models::{
    DisputeSubmission, FileReference, FormField, SubmissionOutcome, TextField,
};
use crate::transport::{IntakeTransport, MultipartPayload};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl FormState {
    /// Whether the last attempt has finished and awaits acknowledgement.
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// In-memory form holding the submitter's details and the attached file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    name: String,
    email: String,
    file: Option<FileReference>,
    state: FormState,
    in_flight: usize,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn file(&self) -> Option<&FileReference> {
        self.file.as_ref()
    }

    /// Number of dispatched attempts that have not completed yet.
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Merge a text field. No validation happens here.
    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        match field {
            TextField::Name => self.name = value.into(),
            TextField::Email => self.email = value.into(),
        }
        self.resume_editing();
    }

    /// Store the picked file, replacing any previous one.
    pub fn attach_file(&mut self, file: FileReference) {
        self.file = Some(file);
        self.resume_editing();
    }

    /// Fields that would block a submit right now.
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(FormField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(FormField::Email);
        }
        if self.file.is_none() {
            missing.push(FormField::Document);
        }
        missing
    }

    /// Enter `Validating`.
    pub fn begin_validation(&mut self) {
        self.state = FormState::Validating;
    }

    /// Check presence of every field.
    ///
    /// On success the form enters `Submitting` and returns the snapshot to
    /// dispatch. On failure nothing is dispatched and the form goes back to
    /// `Editing`, or stays `Submitting` while earlier attempts are in flight.
    pub fn validate(&mut self) -> Result<DisputeSubmission, SubmitError> {
        let missing = self.missing_fields();
        let Some(file) = self.file.clone().filter(|_| missing.is_empty()) else {
            self.state = self.idle_state();
            return Err(SubmitError::Validation { missing });
        };

        self.in_flight += 1;
        self.state = FormState::Submitting;
        Ok(DisputeSubmission {
            submitter_name: self.name.trim().to_string(),
            submitter_email: self.email.trim().to_string(),
            file,
        })
    }

    /// Validate and snapshot the form for dispatch.
    ///
    /// Calling this again while an attempt is in flight starts another one.
    pub fn begin_submit(&mut self) -> Result<DisputeSubmission, SubmitError> {
        self.begin_validation();
        self.validate()
    }

    /// Apply the outcome of a dispatched attempt.
    ///
    /// Success clears every field; failure keeps them for resubmission.
    pub fn complete(&mut self, outcome: &SubmissionOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if outcome.is_success() {
            self.name.clear();
            self.email.clear();
            self.file = None;
            self.state = FormState::Succeeded;
        } else {
            self.state = FormState::Failed;
        }
    }

    /// Return a settled form to `Editing`.
    pub fn acknowledge(&mut self) {
        if self.state.is_settled() {
            self.state = self.idle_state();
        }
    }

    /// Run one full submit attempt.
    pub async fn submit<T: IntakeTransport>(&mut self, transport: &T) -> SubmissionOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(error) => return SubmissionOutcome::Failure(error),
        };
        let outcome = dispatch(transport, submission).await;
        self.complete(&outcome);
        outcome
    }

    const fn idle_state(&self) -> FormState {
        if self.in_flight > 0 {
            FormState::Submitting
        } else {
            FormState::Editing
        }
    }

    fn resume_editing(&mut self) {
        if self.state.is_settled() {
            self.state = self.idle_state();
        }
    }
}

/// Read the document, build the multipart body, and POST it once.
pub async fn dispatch<T: IntakeTransport>(
    transport: &T,
    submission: DisputeSubmission,
) -> SubmissionOutcome {
    tracing::info!(
        "Submitting dispute for {} with document {}",
        submission.submitter_email,
        submission.file.upload_name()
    );

    let document = match transport.fetch_document(&submission.file).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Failed to read attached document: {}", error);
            return SubmissionOutcome::Failure(error);
        }
    };

    let payload = MultipartPayload::for_submission(&submission, document);
    let response = match transport.post(payload).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("Dispute submission failed: {}", error);
            return SubmissionOutcome::Failure(error);
        }
    };

    if response.is_success() {
        tracing::info!("Dispute submitted with HTTP {}", response.status);
        SubmissionOutcome::Success {
            status: response.status,
        }
    } else {
        tracing::warn!("Dispute submission rejected with HTTP {}", response.status);
        SubmissionOutcome::Failure(SubmitError::Rejected {
            status: response.status,
            body: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use tokio::sync::Barrier;

    use super::*;
    use crate::models::FileOrigin;
    use crate::transport::{IntakeResponse, PartBody};
    use pretty_assertions::assert_eq;

    /// Transport that records every call and answers from a script.
    struct RecordingTransport {
        status: Result<u16, String>,
        fetch_error: Option<String>,
        fetches: Cell<usize>,
        posts: RefCell<Vec<MultipartPayload>>,
        barrier: Option<Barrier>,
    }

    impl RecordingTransport {
        fn answering(status: u16) -> Self {
            Self {
                status: Ok(status),
                fetch_error: None,
                fetches: Cell::new(0),
                posts: RefCell::new(Vec::new()),
                barrier: None,
            }
        }

        fn unreachable() -> Self {
            Self {
                status: Err("connection refused".to_string()),
                ..Self::answering(200)
            }
        }

        fn post_count(&self) -> usize {
            self.posts.borrow().len()
        }
    }

    impl IntakeTransport for RecordingTransport {
        async fn fetch_document(&self, file: &FileReference) -> Result<Vec<u8>, SubmitError> {
            self.fetches.set(self.fetches.get() + 1);
            if let Some(error) = &self.fetch_error {
                return Err(SubmitError::Transport(error.clone()));
            }
            Ok(format!("bytes of {}", file.source_uri).into_bytes())
        }

        async fn post(&self, payload: MultipartPayload) -> Result<IntakeResponse, SubmitError> {
            self.posts.borrow_mut().push(payload);
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            match &self.status {
                Ok(status) => Ok(IntakeResponse {
                    status: *status,
                    body: if *status >= 400 {
                        "intake offline".to_string()
                    } else {
                        String::new()
                    },
                }),
                Err(error) => Err(SubmitError::Transport(error.clone())),
            }
        }
    }

    fn evidence() -> FileReference {
        FileReference::new("file:///tmp/evidence.pdf", "evidence.pdf", FileOrigin::NativePicker)
    }

    fn filled_form() -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.update_field(TextField::Name, "Alice");
        form.update_field(TextField::Email, "alice@example.com");
        form.attach_file(evidence());
        form
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submit_with_missing_fields_sends_nothing() {
        for mask in 0_u8..7 {
            let mut form = SubmissionForm::new();
            if mask & 1 != 0 {
                form.update_field(TextField::Name, "Alice");
            }
            if mask & 2 != 0 {
                form.update_field(TextField::Email, "alice@example.com");
            }
            if mask & 4 != 0 {
                form.attach_file(evidence());
            }
            let transport = RecordingTransport::answering(200);

            let outcome = form.submit(&transport).await;

            assert!(
                matches!(outcome, SubmissionOutcome::Failure(SubmitError::Validation { .. })),
                "mask {mask} should fail validation"
            );
            assert_eq!(transport.fetches.get(), 0, "mask {mask}");
            assert_eq!(transport.post_count(), 0, "mask {mask}");
            assert_eq!(form.state(), FormState::Editing);
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = SubmissionForm::new();
        form.update_field(TextField::Name, "   ");
        form.update_field(TextField::Email, "\t");
        form.attach_file(evidence());

        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Validation {
                missing: vec![FormField::Name, FormField::Email]
            })
        );
        assert_eq!(form.in_flight(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn success_resets_every_field() {
        let mut form = filled_form();
        let transport = RecordingTransport::answering(200);

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome, SubmissionOutcome::Success { status: 200 });
        assert_eq!(form.state(), FormState::Succeeded);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.file(), None);

        form.acknowledge();
        assert_eq!(form.state(), FormState::Editing);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejection_keeps_fields() {
        let mut form = filled_form();
        let transport = RecordingTransport::answering(500);

        let outcome = form.submit(&transport).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failure(SubmitError::Rejected {
                status: 500,
                body: "intake offline".to_string()
            })
        );
        assert_eq!(form.state(), FormState::Failed);
        assert_eq!(form, {
            let mut expected = filled_form();
            expected.state = FormState::Failed;
            expected
        });
    }

    #[tokio::test(flavor = "current_thread")]
    async fn transport_errors_keep_fields() {
        let mut form = filled_form();
        let transport = RecordingTransport::unreachable();

        let outcome = form.submit(&transport).await;

        assert!(matches!(outcome, SubmissionOutcome::Failure(SubmitError::Transport(_))));
        assert_eq!(form.state(), FormState::Failed);
        assert_eq!(form.name(), "Alice");
        assert_eq!(form.email(), "alice@example.com");
        assert_eq!(form.file(), Some(&evidence()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unreadable_document_skips_the_post() {
        let mut form = filled_form();
        let transport = RecordingTransport {
            fetch_error: Some("blob revoked".to_string()),
            ..RecordingTransport::answering(200)
        };

        let outcome = form.submit(&transport).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failure(SubmitError::Transport("blob revoked".to_string()))
        );
        assert_eq!(transport.post_count(), 0);
        assert_eq!(form.name(), "Alice");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submit_builds_one_request_with_three_parts() {
        let mut form = filled_form();
        let transport = RecordingTransport::answering(200);

        form.submit(&transport).await;

        let posts = transport.posts.borrow();
        assert_eq!(posts.len(), 1);
        let payload = &posts[0];
        assert_eq!(payload.part_names(), vec!["name", "email", "document"]);
        assert_eq!(
            payload.part("name").map(|part| &part.body),
            Some(&PartBody::Text("Alice".to_string()))
        );
        assert_eq!(
            payload.part("email").map(|part| &part.body),
            Some(&PartBody::Text("alice@example.com".to_string()))
        );
        assert_eq!(
            payload.part("document").map(|part| &part.body),
            Some(&PartBody::File {
                file_name: "evidence.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: b"bytes of file:///tmp/evidence.pdf".to_vec(),
            })
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn overlapping_submits_each_post() {
        let mut form = filled_form();
        let transport = RecordingTransport {
            barrier: Some(Barrier::new(2)),
            ..RecordingTransport::answering(200)
        };

        let first = form.begin_submit().unwrap();
        let second = form.begin_submit().unwrap();
        assert_eq!(form.in_flight(), 2);
        assert_eq!(form.state(), FormState::Submitting);

        // Both posts must be pending at once for the barrier to release.
        let (first_outcome, second_outcome) = tokio::time::timeout(
            Duration::from_secs(5),
            async { tokio::join!(dispatch(&transport, first), dispatch(&transport, second)) },
        )
        .await
        .expect("both submissions should be in flight together");

        assert_eq!(transport.post_count(), 2);
        form.complete(&first_outcome);
        assert_eq!(form.in_flight(), 1);
        form.complete(&second_outcome);
        assert_eq!(form.in_flight(), 0);
        assert_eq!(form.state(), FormState::Succeeded);
    }

    #[test]
    fn state_transitions_are_observable() {
        let mut form = filled_form();
        assert_eq!(form.state(), FormState::Editing);

        form.begin_validation();
        assert_eq!(form.state(), FormState::Validating);

        let submission = form.validate().unwrap();
        assert_eq!(form.state(), FormState::Submitting);
        assert_eq!(submission.submitter_name, "Alice");

        form.complete(&SubmissionOutcome::Failure(SubmitError::Transport(
            "offline".to_string(),
        )));
        assert_eq!(form.state(), FormState::Failed);

        form.update_field(TextField::Name, "Alice B.");
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn failed_validation_during_flight_stays_submitting() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.update_field(TextField::Email, "");

        assert!(form.begin_submit().is_err());
        assert_eq!(form.state(), FormState::Submitting);
        assert_eq!(form.in_flight(), 1);
    }

    #[test]
    fn attach_file_replaces_previous_reference() {
        let mut form = filled_form();
        let replacement =
            FileReference::new("blob:http://localhost/1", "photo.png", FileOrigin::BrowserInput);
        form.attach_file(replacement.clone());
        assert_eq!(form.file(), Some(&replacement));
    }
}
