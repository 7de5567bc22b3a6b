//! UI Components

mod attach_input;
mod dispute_form;
mod outcome_dialog;

pub use attach_input::AttachInputField;
pub use dispute_form::DisputeForm;
pub use outcome_dialog::OutcomeDialog;
