//! State for the name/email form.

use crate::mvi::State;

/// One named slot in the form's data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    /// Display label for the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "Email",
        }
    }
}

/// Per-field validation messages. Empty string means the field is valid.
///
/// Only the name field carries an error slot; email has no validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: String,
}

/// Immutable snapshot of the form.
///
/// Created with empty strings at startup, replaced (never mutated in place)
/// on every dispatched intent, discarded at shutdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub errors: FieldErrors,
}

impl State for FormState {}

impl FormState {
    /// Current value of the given field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
        }
    }

    /// True when the name field currently holds a validation message.
    pub fn has_name_error(&self) -> bool {
        !self.errors.name.is_empty()
    }
}
