//! Form guard state for the upload form.
//!
//! The guard reacts to two browser events: the file input's `change` and the
//! form's `submit`. Each handler computes an outcome here and then applies
//! its side effects (alerts, clearing the input) through [`GuardEffects`], so
//! the rules run without a browser.

#[cfg(test)]
#[path = "upload_form_test.rs"]
mod upload_form_test;

use crate::upload::{INVALID_TYPE_MESSAGE, MISSING_FILE_MESSAGE, extension_of, is_accepted_extension};

/// Browser side effects the guard needs.
pub trait GuardEffects {
    /// Show a blocking advisory message.
    fn alert(&mut self, message: &str);
    /// Reset the file input's selection to empty.
    fn clear_selection(&mut self);
}

/// Reactive state of the upload form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadFormState {
    pub submit_enabled: bool,
}

impl Default for UploadFormState {
    fn default() -> Self {
        // The native submit control starts enabled.
        Self { submit_enabled: true }
    }
}

/// What a file-selection change resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted { extension: String },
    Rejected { extension: String },
    /// No file in the input. Submit state is left as it was.
    Empty,
}

impl SelectionOutcome {
    /// Run the alert and input reset for a rejected selection.
    pub fn apply(&self, effects: &mut impl GuardEffects) {
        if let Self::Rejected { .. } = self {
            effects.alert(INVALID_TYPE_MESSAGE);
            effects.clear_selection();
        }
    }
}

/// What a submit attempt resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Let the browser's native submission run.
    Proceed,
    /// Cancel the default action.
    Blocked,
}

impl SubmitOutcome {
    pub fn apply(self, effects: &mut impl GuardEffects) {
        if self == Self::Blocked {
            effects.alert(MISSING_FILE_MESSAGE);
        }
    }

    pub fn should_prevent_default(self) -> bool {
        self == Self::Blocked
    }
}

impl UploadFormState {
    /// Handle a `change` on the file input.
    ///
    /// `file_name` is the first selected file's name, or `None` when the
    /// selection is empty.
    pub fn select(&mut self, file_name: Option<&str>) -> SelectionOutcome {
        let Some(name) = file_name else {
            log::debug!("file selection empty; submit_enabled={}", self.submit_enabled);
            return SelectionOutcome::Empty;
        };

        let extension = extension_of(name);
        if is_accepted_extension(&extension) {
            self.submit_enabled = true;
            log::debug!("accepted upload candidate: {name}");
            SelectionOutcome::Accepted { extension }
        } else {
            self.submit_enabled = false;
            log::info!("rejected upload candidate {name}: extension {extension:?}");
            SelectionOutcome::Rejected { extension }
        }
    }

    /// Handle a `submit` on the form given how many files the input holds.
    pub fn submit(&self, file_count: u32) -> SubmitOutcome {
        if file_count == 0 {
            log::info!("blocked submit with no file selected");
            SubmitOutcome::Blocked
        } else {
            log::debug!("submitting {file_count} file(s)");
            SubmitOutcome::Proceed
        }
    }
}
