//! Submission controller for the name/email form.
//!
//! The controller is the seam between events and the pure reducer: it owns
//! the current [`FormState`], turns field edits and submit requests into
//! intents, and reports accepted submissions as an explicit return value
//! instead of notifying the user directly.

use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::{Field, FormState};

/// Fixed validation message for an empty name. Not localizable.
pub const NAME_REQUIRED_MESSAGE: &str = "O campo nome é obrigatório.";

/// Data reported to the caller on a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

/// Owns one form state and drives it through the reducer.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, for rendering.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Run the reducer and store the resulting state.
    pub fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// A field's value changed; the full new value replaces the old one.
    pub fn on_field_change(&mut self, field: Field, value: String) {
        self.dispatch(FormIntent::SetField { field, value });
    }

    /// Validate and submit the current state.
    ///
    /// Dispatches exactly one intent per call: either the required-name error
    /// (returning `None`) or an empty message clearing any prior error, in
    /// which case the accepted data is returned to the caller.
    pub fn on_submit(&mut self) -> Option<Submission> {
        if self.state.name.trim().is_empty() {
            tracing::debug!("submission rejected: name is empty");
            self.dispatch(FormIntent::SetError {
                field: Field::Name,
                message: NAME_REQUIRED_MESSAGE.to_string(),
            });
            return None;
        }

        self.dispatch(FormIntent::SetError {
            field: Field::Name,
            message: String::new(),
        });
        let submission = Submission {
            name: self.state.name.clone(),
            email: self.state.email.clone(),
        };
        tracing::info!(name = %submission.name, email = %submission.email, "submission accepted");
        Some(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_change_replaces_value() {
        let mut controller = FormController::new();
        controller.on_field_change(Field::Name, "A".to_string());
        controller.on_field_change(Field::Name, "An".to_string());
        controller.on_field_change(Field::Email, "a@b.com".to_string());
        assert_eq!(controller.state().name, "An");
        assert_eq!(controller.state().email, "a@b.com");
    }

    #[test]
    fn submit_empty_name_sets_error_and_reports_nothing() {
        let mut controller = FormController::new();
        assert_eq!(controller.on_submit(), None);
        assert_eq!(controller.state().errors.name, NAME_REQUIRED_MESSAGE);
    }

    #[test]
    fn submit_whitespace_name_sets_error_and_reports_nothing() {
        let mut controller = FormController::new();
        controller.on_field_change(Field::Name, "   ".to_string());
        assert_eq!(controller.on_submit(), None);
        assert_eq!(controller.state().errors.name, NAME_REQUIRED_MESSAGE);
    }

    #[test]
    fn submit_valid_name_reports_data_and_clears_error() {
        let mut controller = FormController::new();
        assert_eq!(controller.on_submit(), None);

        controller.on_field_change(Field::Name, "Ana".to_string());
        controller.on_field_change(Field::Email, "a@b.com".to_string());
        let submission = controller.on_submit().expect("submission accepted");
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email, "a@b.com");
        assert!(!controller.state().has_name_error());
    }

    #[test]
    fn clearing_name_after_accept_re_raises_error() {
        let mut controller = FormController::new();
        controller.on_field_change(Field::Name, "Ana".to_string());
        assert!(controller.on_submit().is_some());

        controller.on_field_change(Field::Name, String::new());
        assert_eq!(controller.on_submit(), None);
        assert_eq!(controller.state().errors.name, NAME_REQUIRED_MESSAGE);
    }

    #[test]
    fn empty_email_is_accepted() {
        let mut controller = FormController::new();
        controller.on_field_change(Field::Name, "Ana".to_string());
        let submission = controller.on_submit().expect("submission accepted");
        assert_eq!(submission.email, "");
    }
}
