//! # Admission Form State
//!
//! The form as data: six values, the inline errors under them, and the
//! in-flight flag that drives the submit button.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Full Name *            [ Ada Lovelace                 ]                │
//! │  Faculty *              [ S                            ]                │
//! │                          Faculty is required          ◄── error(field)  │
//! │  ...                                                                    │
//! │  E-mail Address *       [ ada@example.com              ]  (type=email)  │
//! │                                                                         │
//! │  [ Submit Application ]   idle: enabled                                 │
//! │  [ ⟳ Submitting...    ]   in flight: disabled + busy                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use admission_core::{ApplicationInput, Field, FieldErrors, InputKind};

const SUBMIT_LABEL: &str = "Submit Application";
const SUBMITTING_LABEL: &str = "Submitting...";

/// Render state of the submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
    /// Show a spinner next to the label.
    pub busy: bool,
}

/// Everything needed to draw one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_kind: InputKind,
    pub value: String,
    pub error: Option<String>,
}

/// One admission form instance.
#[derive(Debug, Clone, Default)]
pub struct AdmissionForm {
    values: ApplicationInput,
    errors: FieldErrors,
    submitting: bool,
}

impl AdmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Updates a field. Editing a field clears its stale error.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
    }

    pub fn values(&self) -> &ApplicationInput {
        &self.values
    }

    /// Inline message under `field`, if it failed the last validation.
    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub(crate) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.submitting {
            SubmitButton {
                label: SUBMITTING_LABEL,
                disabled: true,
                busy: true,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                disabled: false,
                busy: false,
            }
        }
    }

    /// All six inputs in form order.
    pub fn fields(&self) -> Vec<FieldView> {
        Field::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                input_kind: field.input_kind(),
                value: self.value(field).to_string(),
                error: self.error(field),
            })
            .collect()
    }

    /// Clears every value and every error.
    pub fn reset(&mut self) {
        self.values = ApplicationInput::default();
        self.errors.clear();
    }
}
