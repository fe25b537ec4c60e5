//! Reducer for the name/email form.

use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{Field, FieldErrors, FormState};

/// Reducer for form state transitions.
///
/// Pure function — validation decisions and reporting happen in the
/// controller around the dispatch call, never in here.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetField { field, value } => match field {
                Field::Name => FormState { name: value, ..state },
                Field::Email => FormState { email: value, ..state },
            },

            FormIntent::SetError { field, message } => match field {
                Field::Name => FormState {
                    errors: FieldErrors { name: message },
                    ..state
                },
                // Email has no error slot; ignore silently.
                Field::Email => state,
            },
        }
    }
}
