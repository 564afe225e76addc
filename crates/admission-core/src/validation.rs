//! # Validation Module
//!
//! Field rules for the admission form and the whole-form validator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_application                               │
//! │                                                                         │
//! │  ApplicationInput (raw)                                                 │
//! │     │                                                                   │
//! │     ├── fullName       trim → len 2..=100                               │
//! │     ├── faculty        trim → len 2..=100                               │
//! │     ├── department     trim → len 2..=100                               │
//! │     ├── university     trim → len 2..=150                               │
//! │     ├── whatsappNumber trim → len 10..=20 → chars in [0-9+()- ]         │
//! │     └── email          trim → address syntax → len ≤ 255                │
//! │                                                                         │
//! │  Every field is checked, errors are collected (first failing rule      │
//! │  per field). Result: Ok(ApplicationRecord) or Err(FieldErrors),        │
//! │  never both.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use admission_core::validation::{validate_email, validate_whatsapp_number};
//!
//! assert_eq!(validate_email("  user@example.com ").unwrap(), "user@example.com");
//! assert!(validate_whatsapp_number("+234 803 123 4567").is_ok());
//! assert!(validate_whatsapp_number("call me maybe").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FieldErrors, ValidationError};
use crate::types::{ApplicationInput, ApplicationRecord, Field};
use crate::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_UNIVERSITY_LEN, MAX_WHATSAPP_LEN, MIN_NAME_LEN,
    MIN_WHATSAPP_LEN,
};

/// Result type for single-field validation. `Ok` carries the trimmed value.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Local part, `@`, then dot-separated labels ending in an alphabetic TLD.
/// Leading dot and `..` are rejected separately since `regex` has no
/// lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

// =============================================================================
// Whole-Form Validator
// =============================================================================

/// Validates all six fields and builds the record.
///
/// ## Rules
/// - Each field is trimmed before its checks
/// - Every field is checked; failures do not stop the other fields
/// - Only the first failing rule of a field is reported
///
/// ## Example
/// ```rust
/// use admission_core::{validate_application, ApplicationInput, Field};
///
/// let input = ApplicationInput {
///     full_name: "J".into(),
///     email: "not-an-email".into(),
///     ..Default::default()
/// };
///
/// let errors = validate_application(&input).unwrap_err();
/// assert!(errors.contains(Field::FullName));
/// assert!(errors.contains(Field::Email));
/// ```
pub fn validate_application(input: &ApplicationInput) -> Result<ApplicationRecord, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut take = |result: ValidationResult<String>| match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    let full_name = take(validate_full_name(&input.full_name));
    let faculty = take(validate_faculty(&input.faculty));
    let department = take(validate_department(&input.department));
    let university = take(validate_university(&input.university));
    let whatsapp_number = take(validate_whatsapp_number(&input.whatsapp_number));
    let email = take(validate_email(&input.email));

    match (
        full_name,
        faculty,
        department,
        university,
        whatsapp_number,
        email,
    ) {
        (
            Some(full_name),
            Some(faculty),
            Some(department),
            Some(university),
            Some(whatsapp_number),
            Some(email),
        ) => Ok(ApplicationRecord::new(
            full_name,
            faculty,
            department,
            university,
            whatsapp_number,
            email,
        )),
        _ => Err(errors),
    }
}

/// Validates one field's raw value, dispatching on `field`.
pub fn validate_field(field: Field, raw: &str) -> ValidationResult<String> {
    match field {
        Field::FullName => validate_full_name(raw),
        Field::Faculty => validate_faculty(raw),
        Field::Department => validate_department(raw),
        Field::University => validate_university(raw),
        Field::WhatsappNumber => validate_whatsapp_number(raw),
        Field::Email => validate_email(raw),
    }
}

// =============================================================================
// Name-like Fields
// =============================================================================

pub fn validate_full_name(raw: &str) -> ValidationResult<String> {
    check_length(Field::FullName, raw.trim(), MIN_NAME_LEN, MAX_NAME_LEN)
}

pub fn validate_faculty(raw: &str) -> ValidationResult<String> {
    check_length(Field::Faculty, raw.trim(), MIN_NAME_LEN, MAX_NAME_LEN)
}

pub fn validate_department(raw: &str) -> ValidationResult<String> {
    check_length(Field::Department, raw.trim(), MIN_NAME_LEN, MAX_NAME_LEN)
}

pub fn validate_university(raw: &str) -> ValidationResult<String> {
    check_length(Field::University, raw.trim(), MIN_NAME_LEN, MAX_UNIVERSITY_LEN)
}

// =============================================================================
// Contact Fields
// =============================================================================

/// Validates a WhatsApp number.
///
/// ## Rules
/// - 10 to 20 characters after trimming, separators included
/// - Only digits, `+`, space, `(`, `)` and `-`
///
/// ## Example
/// ```rust
/// use admission_core::validation::validate_whatsapp_number;
///
/// assert!(validate_whatsapp_number("(0803) 123-4567").is_ok());
/// assert!(validate_whatsapp_number("0803123456x").is_err());
/// ```
pub fn validate_whatsapp_number(raw: &str) -> ValidationResult<String> {
    let field = Field::WhatsappNumber;
    let number = check_length(field, raw.trim(), MIN_WHATSAPP_LEN, MAX_WHATSAPP_LEN)?;

    if !number.chars().all(is_phone_char) {
        return Err(ValidationError::InvalidFormat { field });
    }

    Ok(number)
}

/// Validates an email address.
///
/// ## Rules
/// - Must look like `local@domain.tld` after trimming
/// - Local part may not start with `.` or contain `..`
/// - At most 255 characters
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    let field = Field::Email;
    let email = raw.trim();

    if !is_email(email) {
        return Err(ValidationError::InvalidFormat { field });
    }

    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_EMAIL_LEN,
        });
    }

    Ok(email.to_string())
}

// =============================================================================
// Helpers
// =============================================================================

fn check_length(field: Field, value: &str, min: usize, max: usize) -> ValidationResult<String> {
    let len = value.chars().count();

    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }

    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_string())
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | ' ' | '(' | ')' | '-')
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ApplicationInput {
        ApplicationInput {
            full_name: "Jo".into(),
            faculty: "CS".into(),
            department: "AI".into(),
            university: "X University".into(),
            whatsapp_number: "+1234567890".into(),
            email: "jo@x.com".into(),
        }
    }

    /// Shortest accepted value for each field.
    fn minimal_value(field: Field) -> String {
        match field {
            Field::WhatsappNumber => "0".repeat(MIN_WHATSAPP_LEN),
            Field::Email => "a@b.co".to_string(),
            _ => "a".repeat(MIN_NAME_LEN),
        }
    }

    #[test]
    fn test_reference_input_validates_to_exact_wire_shape() {
        let record = validate_application(&valid_input()).unwrap();
        let body = record.to_json().unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "fullName": "Jo",
                "faculty": "CS",
                "department": "AI",
                "university": "X University",
                "whatsappNumber": "+1234567890",
                "email": "jo@x.com",
            })
        );
        assert_eq!(body.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_minimum_length_passes_and_one_shorter_fails() {
        for field in Field::ALL {
            let min = minimal_value(field);
            assert!(
                validate_field(field, &min).is_ok(),
                "{field} should accept {min:?}"
            );

            let mut shorter = min.clone();
            shorter.remove(0);
            let err = validate_field(field, &shorter).unwrap_err();
            assert_eq!(err.field(), field);
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_maximum_lengths() {
        assert!(validate_full_name(&"a".repeat(100)).is_ok());
        assert_eq!(
            validate_full_name(&"a".repeat(101)).unwrap_err(),
            ValidationError::TooLong {
                field: Field::FullName,
                max: 100
            }
        );
        assert!(validate_university(&"a".repeat(150)).is_ok());
        assert!(validate_university(&"a".repeat(151)).is_err());
        assert!(validate_whatsapp_number(&"1".repeat(20)).is_ok());
        assert_eq!(
            validate_whatsapp_number(&"1".repeat(21))
                .unwrap_err()
                .to_string(),
            "WhatsApp number is too long"
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(validate_faculty("  Science \t").unwrap(), "Science");
        // Padding does not count toward the minimum.
        assert!(validate_department("  A  ").is_err());

        let mut input = valid_input();
        input.full_name = "  Ada Lovelace  ".into();
        let record = validate_application(&input).unwrap();
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(validate_full_name("Ñé").is_ok());
    }

    #[test]
    fn test_whatsapp_number_charset() {
        assert!(validate_whatsapp_number("+234 803 123 4567").is_ok());
        assert!(validate_whatsapp_number("(0803) 123-4567").is_ok());

        for bad in ["+234 803 ABC 4567", "0803123456x", "phone12345"] {
            assert_eq!(
                validate_whatsapp_number(bad).unwrap_err(),
                ValidationError::InvalidFormat {
                    field: Field::WhatsappNumber
                },
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_syntax() {
        for good in [
            "user@example.com",
            "first.last+tag@mail.example.org",
            "o'brien@uni.ac.uk",
            "a@b.co",
        ] {
            assert!(validate_email(good).is_ok(), "{good:?} should pass");
        }

        for bad in [
            "not-an-email",
            "user@localhost",
            "@example.com",
            "user@",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@-example.com",
            "user@example.c",
            "user name@example.com",
            "",
        ] {
            assert_eq!(
                validate_email(bad).unwrap_err().to_string(),
                "Please enter a valid email address",
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn test_email_max_length() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(MAX_EMAIL_LEN - 64 - 1 - 4));
        let at_limit = format!("{local}@{domain}");
        assert_eq!(at_limit.len(), MAX_EMAIL_LEN);
        assert!(validate_email(&at_limit).is_ok());

        let over = format!("a{at_limit}");
        assert_eq!(
            validate_email(&over).unwrap_err(),
            ValidationError::TooLong {
                field: Field::Email,
                max: MAX_EMAIL_LEN
            }
        );
    }

    #[test]
    fn test_all_failing_fields_are_collected() {
        let errors = validate_application(&ApplicationInput::default()).unwrap_err();
        assert_eq!(errors.len(), 6);
        for field in Field::ALL {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert_eq!(
            errors.message(Field::Faculty).as_deref(),
            Some("Faculty is required")
        );
    }

    #[test]
    fn test_one_bad_field_yields_only_that_error() {
        let mut input = valid_input();
        input.whatsapp_number = "12345".into();

        let errors = validate_application(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(Field::WhatsappNumber).as_deref(),
            Some("Please enter a valid WhatsApp number")
        );
    }
}
