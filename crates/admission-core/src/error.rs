//! # Error Types
//!
//! Validation error types for admission-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  admission-core errors (this file)                                     │
//! │  ├── ValidationError  - One failed rule on one field                   │
//! │  └── FieldErrors      - Every failing field of one submit attempt      │
//! │                                                                         │
//! │  admission-client errors (separate crate)                              │
//! │  └── SubmitError      - Config / transport / HTTP failures             │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors → inline text under each input    │
//! │        (never sent over the network)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `Display` is the exact text shown under the field
//! 3. Errors are enum variants, never String

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Validation Error
// =============================================================================

/// A single rule violation on one field.
///
/// ## Messages
/// Each field has its own wording, e.g. a one-letter faculty reads
/// "Faculty is required" while a one-letter full name reads
/// "Full name must be at least 2 characters".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Trimmed value is shorter than the field minimum.
    #[error("{}", too_short_message(.field))]
    TooShort { field: Field, min: usize },

    /// Trimmed value is longer than the field maximum.
    #[error("{}", too_long_message(.field))]
    TooLong { field: Field, max: usize },

    /// Value has the right length but the wrong shape (phone charset,
    /// email syntax).
    #[error("{}", invalid_format_message(.field))]
    InvalidFormat { field: Field },
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field } => field,
        }
    }
}

fn too_short_message(field: &Field) -> &'static str {
    match field {
        Field::FullName => "Full name must be at least 2 characters",
        Field::Faculty => "Faculty is required",
        Field::Department => "Department is required",
        Field::University => "University/School is required",
        Field::WhatsappNumber => "Please enter a valid WhatsApp number",
        Field::Email => "Please enter a valid email address",
    }
}

fn too_long_message(field: &Field) -> &'static str {
    match field {
        Field::FullName => "Full name must be less than 100 characters",
        Field::Faculty => "Faculty must be less than 100 characters",
        Field::Department => "Department must be less than 100 characters",
        Field::University => "University/School must be less than 150 characters",
        Field::WhatsappNumber => "WhatsApp number is too long",
        Field::Email => "Email must be less than 255 characters",
    }
}

fn invalid_format_message(field: &Field) -> &'static str {
    match field {
        Field::WhatsappNumber => "Please enter a valid phone number",
        Field::Email => "Please enter a valid email address",
        // Name-like fields have no format rule; fall back to the short message.
        other => too_short_message(other),
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Every failing field of one validation pass, one error per field.
///
/// Iterates and serializes in form order. Serializes as a flat
/// `{ "<wireName>": "<message>" }` object for the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` under its own field. A field keeps its first error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Drops the error recorded for `field`, if any.
    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    /// Message shown under `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(Field::as_str).collect();
        write!(
            f,
            "{} field(s) failed validation: {}",
            self.0.len(),
            fields.join(", ")
        )
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, err) in &self.0 {
            map.serialize_entry(field.as_str(), &err.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
