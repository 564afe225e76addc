//! # admission-client: Submission Side of the Intake Form
//!
//! Everything with a side effect lives here: the one POST to the admissions
//! API, the in-flight flag, notifications, and configuration.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SubmissionController                                 │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ AdmissionForm  │  │ AdmissionsApi  │  │      Notifier          │    │
//! │  │                │  │                │  │                        │    │
//! │  │ values, inline │  │ HttpAdmissions │  │ "Success!" / "Error"   │    │
//! │  │ errors, flag,  │  │ Api (reqwest)  │  │ toasts, drawn by the   │    │
//! │  │ button state   │  │ or a test fake │  │ front end              │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  IntakeConfig: endpoint + timeout (defaults → intake.toml → env)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Endpoint and timeout configuration
//! - [`controller`] - `SubmissionController`, the submit flow
//! - [`error`] - Submission error types
//! - [`form`] - Form view-model (values, errors, submit button)
//! - [`notify`] - Notification types and the `Notifier` seam
//! - [`transport`] - `AdmissionsApi` and its reqwest implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use admission_client::{HttpAdmissionsApi, IntakeConfig, SubmissionController};
//! use admission_core::Field;
//!
//! let config = IntakeConfig::load(None)?;
//! let api = HttpAdmissionsApi::from_config(&config)?;
//! let controller = SubmissionController::new(Arc::new(api));
//!
//! controller.set_value(Field::FullName, "Ada Lovelace");
//! // ... the other five fields ...
//! let outcome = controller.submit().await;
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod notify;
pub mod transport;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ApiSettings, IntakeConfig, DEFAULT_ENDPOINT};
pub use controller::{SubmissionController, SubmitOutcome};
pub use error::{SubmitError, SubmitResult};
pub use form::{AdmissionForm, FieldView, SubmitButton};
pub use notify::{NoOpNotifier, Notification, NotificationVariant, Notifier};
pub use transport::{AdmissionsApi, HttpAdmissionsApi};
