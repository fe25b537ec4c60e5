//! Intents for the name/email form.

use crate::form::state::Field;
use crate::mvi::Intent;

/// Intents that can be dispatched to the form reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Overwrite the value of one field.
    SetField { field: Field, value: String },

    /// Overwrite the validation message of one field.
    /// An empty message marks the field as valid again.
    SetError { field: Field, message: String },
}

impl Intent for FormIntent {}
