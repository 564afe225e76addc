//! # Domain Types
//!
//! Core domain types used throughout the intake form.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐  validate_application  ┌──────────────────────┐  │
//! │  │ ApplicationInput │ ─────────────────────► │ ApplicationRecord    │  │
//! │  │  ──────────────  │          │             │  ──────────────────  │  │
//! │  │  raw strings     │          │             │  trimmed, checked    │  │
//! │  │  (what was typed)│          │             │  (only via validator)│  │
//! │  └──────────────────┘          │             └──────────────────────┘  │
//! │                                ▼                                        │
//! │                        ┌──────────────┐                                │
//! │                        │ FieldErrors  │  Field → message               │
//! │                        └──────────────┘                                │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────┐                               │
//! │  │      Field       │   │  InputKind   │                               │
//! │  │  six variants,   │   │  Text        │                               │
//! │  │  in form order   │   │  Tel / Email │                               │
//! │  └──────────────────┘   └──────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Field
// =============================================================================

/// One of the six inputs on the admission form.
///
/// Variants are declared in form order, so `Ord` (and therefore any
/// `BTreeMap<Field, _>`) follows the order fields appear on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    FullName,
    Faculty,
    Department,
    University,
    WhatsappNumber,
    Email,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Faculty,
        Field::Department,
        Field::University,
        Field::WhatsappNumber,
        Field::Email,
    ];

    /// Wire name used in the JSON body and in error maps.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Faculty => "faculty",
            Field::Department => "department",
            Field::University => "university",
            Field::WhatsappNumber => "whatsappNumber",
            Field::Email => "email",
        }
    }

    /// Label shown next to the input. Every field is required.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name *",
            Field::Faculty => "Faculty *",
            Field::Department => "Department *",
            Field::University => "University / School *",
            Field::WhatsappNumber => "WhatsApp Number *",
            Field::Email => "E-mail Address *",
        }
    }

    /// Hint text shown inside an empty input.
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Field::FullName => "Enter your full name",
            Field::Faculty => "e.g., Science, Arts, Engineering",
            Field::Department => "e.g., Computer Science, Biology",
            Field::University => "Enter your institution name",
            Field::WhatsappNumber => "+234 xxx xxx xxxx",
            Field::Email => "your.email@example.com",
        }
    }

    /// Input affordance the front end should use for this field.
    pub const fn input_kind(&self) -> InputKind {
        match self {
            Field::WhatsappNumber => InputKind::Tel,
            Field::Email => InputKind::Email,
            _ => InputKind::Text,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of an input, mirroring HTML `type=` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InputKind {
    Text,
    Tel,
    Email,
}

// =============================================================================
// Application Input
// =============================================================================

/// Raw form values exactly as the applicant typed them.
///
/// Nothing here is trimmed or checked; see
/// [`validate_application`](crate::validation::validate_application).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ApplicationInput {
    pub full_name: String,
    pub faculty: String,
    pub department: String,
    pub university: String,
    pub whatsapp_number: String,
    pub email: String,
}

impl ApplicationInput {
    /// Returns the raw value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Faculty => &self.faculty,
            Field::Department => &self.department,
            Field::University => &self.university,
            Field::WhatsappNumber => &self.whatsapp_number,
            Field::Email => &self.email,
        }
    }

    /// Replaces the raw value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Faculty => &mut self.faculty,
            Field::Department => &mut self.department,
            Field::University => &mut self.university,
            Field::WhatsappNumber => &mut self.whatsapp_number,
            Field::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// =============================================================================
// Application Record
// =============================================================================

/// A validated admission application.
///
/// ## Invariant
/// All six fields satisfy their rules at the same time. The only way to get
/// one is [`validate_application`](crate::validation::validate_application),
/// which never builds a partially valid record. It has no `Deserialize` impl
/// and no setters.
///
/// ## Wire Shape
/// ```json
/// {
///   "fullName": "Jo",
///   "faculty": "CS",
///   "department": "AI",
///   "university": "X University",
///   "whatsappNumber": "+1234567890",
///   "email": "jo@x.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApplicationRecord {
    full_name: String,
    faculty: String,
    department: String,
    university: String,
    whatsapp_number: String,
    email: String,
}

impl ApplicationRecord {
    pub(crate) fn new(
        full_name: String,
        faculty: String,
        department: String,
        university: String,
        whatsapp_number: String,
        email: String,
    ) -> Self {
        ApplicationRecord {
            full_name,
            faculty,
            department,
            university,
            whatsapp_number,
            email,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn whatsapp_number(&self) -> &str {
        &self.whatsapp_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the validated value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Faculty => &self.faculty,
            Field::Department => &self.department,
            Field::University => &self.university,
            Field::WhatsappNumber => &self.whatsapp_number,
            Field::Email => &self.email,
        }
    }

    /// Serializes the record into the JSON request body.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_wire_names_match_serde() {
        for field in Field::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, serde_json::Value::String(field.as_str().to_string()));
        }
    }

    #[test]
    fn test_field_order_is_form_order() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
        assert_eq!(Field::ALL[0], Field::FullName);
        assert_eq!(Field::ALL[5], Field::Email);
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(Field::WhatsappNumber.input_kind(), InputKind::Tel);
        assert_eq!(Field::Email.input_kind(), InputKind::Email);
        assert_eq!(Field::Faculty.input_kind(), InputKind::Text);
    }

    #[test]
    fn test_input_get_set() {
        let mut input = ApplicationInput::default();
        assert!(input.is_empty());

        input.set(Field::WhatsappNumber, "+234 803 123 4567");
        assert_eq!(input.get(Field::WhatsappNumber), "+234 803 123 4567");
        assert_eq!(input.whatsapp_number, "+234 803 123 4567");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_input_deserializes_partial_camel_case() {
        let input: ApplicationInput =
            serde_json::from_str(r#"{"fullName":"Ada","whatsappNumber":"123"}"#).unwrap();
        assert_eq!(input.full_name, "Ada");
        assert_eq!(input.whatsapp_number, "123");
        assert_eq!(input.email, "");
    }
}
