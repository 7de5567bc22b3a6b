//! Attachment selection.
//!
//! [`FilePicker`] is the capability the host platform provides; the app picks
//! one implementation at startup. [`AttachmentSelector`] holds the single
//! current selection and reports successful picks through a callback.

use crate::error::Result;
use crate::models::{FileOrigin, FileReference};

/// Label shown on the attach control before anything is picked.
pub const ATTACH_LABEL: &str = "Attach Files";
/// Label shown on the attach control once a file is selected.
pub const CHANGE_LABEL: &str = "Change Files";

/// Host capability that asks the user for one file.
#[allow(async_fn_in_trait)]
pub trait FilePicker {
    /// Origin stamped on every reference this picker produces.
    fn origin(&self) -> FileOrigin;

    /// Ask the user for a file.
    ///
    /// Returns `Ok(None)` when the user dismisses the chooser.
    async fn pick(&self) -> Result<Option<FileReference>>;
}

/// How a pick attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Selected,
    Cancelled,
    Failed,
}

/// Tracks the file attached to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSelector {
    selected: Option<FileReference>,
}

impl AttachmentSelector {
    pub const fn new() -> Self {
        Self { selected: None }
    }

    pub const fn selected(&self) -> Option<&FileReference> {
        self.selected.as_ref()
    }

    pub const fn action_label(&self) -> &'static str {
        if self.selected.is_some() {
            CHANGE_LABEL
        } else {
            ATTACH_LABEL
        }
    }

    /// Run `picker` and apply its result.
    pub async fn select_file<P, F>(&mut self, picker: &P, on_file_selected: F) -> PickOutcome
    where
        P: FilePicker,
        F: FnOnce(FileReference),
    {
        let result = picker.pick().await;
        self.resolve(result, on_file_selected)
    }

    /// Apply a finished pick.
    ///
    /// Only a successful pick replaces the selection and invokes
    /// `on_file_selected`; cancellation and failure leave it untouched.
    pub fn resolve<F>(
        &mut self,
        result: Result<Option<FileReference>>,
        on_file_selected: F,
    ) -> PickOutcome
    where
        F: FnOnce(FileReference),
    {
        match result {
            Ok(Some(reference)) => {
                tracing::debug!(
                    "Picked {} via {} ({:?} bytes)",
                    reference.display_name,
                    reference.origin,
                    reference.size_bytes
                );
                self.selected = Some(reference.clone());
                on_file_selected(reference);
                PickOutcome::Selected
            }
            Ok(None) => {
                tracing::debug!("File pick cancelled");
                PickOutcome::Cancelled
            }
            Err(error) => {
                tracing::error!("Error picking document: {}", error);
                PickOutcome::Failed
            }
        }
    }

    /// Forget the selection after the form has been reset.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    /// Picker that replays scripted results.
    struct ScriptedPicker {
        results: RefCell<VecDeque<Result<Option<FileReference>>>>,
    }

    impl ScriptedPicker {
        fn new(results: Vec<Result<Option<FileReference>>>) -> Self {
            Self {
                results: RefCell::new(results.into()),
            }
        }
    }

    impl FilePicker for ScriptedPicker {
        fn origin(&self) -> FileOrigin {
            FileOrigin::NativePicker
        }

        async fn pick(&self) -> Result<Option<FileReference>> {
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(None))
        }
    }

    fn reference(name: &str) -> FileReference {
        FileReference::new(format!("file:///tmp/{name}"), name, FileOrigin::NativePicker)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn successful_pick_invokes_callback_once() {
        let picker = ScriptedPicker::new(vec![Ok(Some(reference("evidence.pdf")))]);
        let mut selector = AttachmentSelector::new();
        let mut received = Vec::new();

        let outcome = selector
            .select_file(&picker, |file| received.push(file))
            .await;

        assert_eq!(outcome, PickOutcome::Selected);
        assert_eq!(received, vec![reference("evidence.pdf")]);
        assert_eq!(selector.selected(), Some(&reference("evidence.pdf")));
        assert_eq!(selector.action_label(), CHANGE_LABEL);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn cancelled_pick_keeps_previous_selection() {
        let picker = ScriptedPicker::new(vec![Ok(Some(reference("first.pdf"))), Ok(None)]);
        let mut selector = AttachmentSelector::new();
        selector.select_file(&picker, |_| {}).await;

        let mut calls = 0;
        let outcome = selector.select_file(&picker, |_| calls += 1).await;

        assert_eq!(outcome, PickOutcome::Cancelled);
        assert_eq!(calls, 0);
        assert_eq!(selector.selected(), Some(&reference("first.pdf")));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_pick_is_silent() {
        let picker = ScriptedPicker::new(vec![Err(Error::Picker("dialog crashed".to_string()))]);
        let mut selector = AttachmentSelector::new();

        let mut calls = 0;
        let outcome = selector.select_file(&picker, |_| calls += 1).await;

        assert_eq!(outcome, PickOutcome::Failed);
        assert_eq!(calls, 0);
        assert_eq!(selector.selected(), None);
        assert_eq!(selector.action_label(), ATTACH_LABEL);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn repeated_picks_overwrite_selection() {
        let picker = ScriptedPicker::new(vec![
            Ok(Some(reference("first.pdf"))),
            Ok(Some(reference("second.pdf"))),
        ]);
        let mut selector = AttachmentSelector::new();
        selector.select_file(&picker, |_| {}).await;
        selector.select_file(&picker, |_| {}).await;

        assert_eq!(selector.selected(), Some(&reference("second.pdf")));
    }

    #[test]
    fn clear_resets_label() {
        let mut selector = AttachmentSelector::new();
        selector.resolve(Ok(Some(reference("a.txt"))), |_| {});
        selector.clear();
        assert_eq!(selector.selected(), None);
        assert_eq!(selector.action_label(), ATTACH_LABEL);
    }
}
