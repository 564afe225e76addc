//! # admission-core: Pure Validation Logic for Admission Intake
//!
//! This crate is the **heart** of the intake form. It turns the six raw
//! strings a prospective student types into either a validated
//! [`ApplicationRecord`] or a per-field error map. No I/O happens here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admission Intake Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (apps/intake)                      │   │
//! │  │    Prompt fields ──► Show inline errors ──► Show notification  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              admission-client (SubmissionController)            │   │
//! │  │    validate ──► serialize ──► POST ──► notify ──► reset        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ admission-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌──────────────────┐   ┌──────────────┐      │   │
//! │  │   │   types   │   │    validation    │   │    error     │      │   │
//! │  │   │  Field    │   │  per-field rules │   │ Validation-  │      │   │
//! │  │   │  Record   │   │  validate_app... │   │ Error        │      │   │
//! │  │   └───────────┘   └──────────────────┘   └──────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Field, ApplicationInput, ApplicationRecord)
//! - [`error`] - Validation error types
//! - [`validation`] - Field rules and the whole-form validator
//!
//! ## Example Usage
//!
//! ```rust
//! use admission_core::{validate_application, ApplicationInput};
//!
//! let input = ApplicationInput {
//!     full_name: "Jo".into(),
//!     faculty: "CS".into(),
//!     department: "AI".into(),
//!     university: "X University".into(),
//!     whatsapp_number: "+1234567890".into(),
//!     email: "jo@x.com".into(),
//! };
//!
//! let record = validate_application(&input).unwrap();
//! assert_eq!(record.email(), "jo@x.com");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FieldErrors, ValidationError};
pub use types::{ApplicationInput, ApplicationRecord, Field, InputKind};
pub use validation::validate_application;

// =============================================================================
// Field Length Limits
// =============================================================================
// Lengths count characters of the trimmed value.

/// Minimum length of the name-like fields (full name, faculty, department,
/// university).
pub const MIN_NAME_LEN: usize = 2;

/// Maximum length of full name, faculty and department.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the university / school name.
pub const MAX_UNIVERSITY_LEN: usize = 150;

/// Minimum length of a WhatsApp number, separators included.
pub const MIN_WHATSAPP_LEN: usize = 10;

/// Maximum length of a WhatsApp number, separators included.
pub const MAX_WHATSAPP_LEN: usize = 20;

/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: usize = 255;
