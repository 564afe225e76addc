//! # Submission Controller
//!
//! Orchestrates one submit attempt for one form instance.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         submit()                                        │
//! │                                                                         │
//! │  ┌─ lock form ─────────────────────────────────────────────────────┐   │
//! │  │  in flight? ──yes──► Ignored                                    │   │
//! │  │  validate values ──errors──► store inline errors ──► Invalid    │   │
//! │  │  clear errors, set in-flight flag, take InFlightGuard           │   │
//! │  └─ unlock ────────────────────────────────────────────────────────┘   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  POST record (only await point)                                        │
//! │         │                                                               │
//! │    ┌────┴───────────────┐                                              │
//! │    ▼                    ▼                                               │
//! │  2xx + JSON          anything else (incl. a panic in the transport)    │
//! │  notify "Success!"   notify "Error" (generic)                          │
//! │  reset form          keep values                                       │
//! │  Submitted(body)     Failed(err)                                       │
//! │    │                    │                                               │
//! │    └────────┬───────────┘                                              │
//! │             ▼                                                           │
//! │  InFlightGuard dropped ──► flag cleared                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form lock is never held across the network await, so the front end
//! can keep reading form state (button label, values) while a request is
//! pending.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::FutureExt;
use serde_json::Value;
use tracing::{debug, info, warn};

use admission_core::{validate_application, ApplicationInput, ApplicationRecord, Field, FieldErrors};

use crate::error::SubmitError;
use crate::form::AdmissionForm;
use crate::notify::{NoOpNotifier, Notification, Notifier};
use crate::transport::AdmissionsApi;

/// How a call to [`SubmissionController::submit`] ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The API accepted the application. Carries the (otherwise unused)
    /// response body.
    Submitted(Value),

    /// Validation failed; no request was sent.
    Invalid(FieldErrors),

    /// The request failed; values are still in the form.
    Failed(SubmitError),

    /// A submission was already in flight; nothing happened.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Clears the in-flight flag when dropped.
struct InFlightGuard<'a> {
    form: &'a Mutex<AdmissionForm>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        lock_form(self.form).set_submitting(false);
        debug!("Submission settled, form idle");
    }
}

/// Outcome of the synchronous half of `submit`.
enum Begin<'a> {
    Ready(ApplicationRecord, InFlightGuard<'a>),
    Invalid(FieldErrors),
    Busy,
}

/// Owns one admission form and submits it.
pub struct SubmissionController {
    form: Mutex<AdmissionForm>,
    api: Arc<dyn AdmissionsApi>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionController {
    /// Creates a controller that does not present notifications.
    pub fn new(api: Arc<dyn AdmissionsApi>) -> Self {
        Self::with_notifier(api, Arc::new(NoOpNotifier))
    }

    pub fn with_notifier(api: Arc<dyn AdmissionsApi>, notifier: Arc<dyn Notifier>) -> Self {
        SubmissionController {
            form: Mutex::new(AdmissionForm::new()),
            api,
            notifier,
        }
    }

    // =========================================================================
    // Form Access
    // =========================================================================

    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        self.form().set_value(field, value);
    }

    /// Replaces all six values at once.
    pub fn fill(&self, input: ApplicationInput) {
        let mut form = self.form();
        for field in Field::ALL {
            form.set_value(field, input.get(field));
        }
    }

    /// Runs `f` with read access to the form.
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AdmissionForm) -> R,
    {
        f(&self.form())
    }

    /// Copy of the current form state.
    pub fn snapshot(&self) -> AdmissionForm {
        self.form().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.form().is_submitting()
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Validates the current values and, if they pass, posts them.
    ///
    /// At most one submission is in flight per controller; a call made while
    /// one is pending returns [`SubmitOutcome::Ignored`] without touching
    /// the form or the network.
    pub async fn submit(&self) -> SubmitOutcome {
        let (record, _in_flight) = match self.begin() {
            Begin::Ready(record, guard) => (record, guard),
            Begin::Invalid(errors) => return SubmitOutcome::Invalid(errors),
            Begin::Busy => return SubmitOutcome::Ignored,
        };

        info!("Submitting admission application");

        let sent = AssertUnwindSafe(self.api.submit_application(&record))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(SubmitError::Unexpected(panic_message(panic.as_ref()))));

        match sent {
            Ok(body) => {
                info!("Admission application accepted");
                self.notifier.notify(&Notification::submitted());
                self.form().reset();
                SubmitOutcome::Submitted(body)
            }
            Err(err) => {
                warn!(error = %err, "Admission application submission failed");
                self.notifier.notify(&Notification::submission_failed());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Check-and-set of the flag plus validation, under one lock.
    fn begin(&self) -> Begin<'_> {
        let mut form = self.form();

        if form.is_submitting() {
            debug!("Submit ignored, a submission is already in flight");
            return Begin::Busy;
        }

        match validate_application(form.values()) {
            Ok(record) => {
                form.set_errors(FieldErrors::new());
                form.set_submitting(true);
                Begin::Ready(record, InFlightGuard { form: &self.form })
            }
            Err(errors) => {
                debug!(%errors, "Application failed validation");
                form.set_errors(errors.clone());
                Begin::Invalid(errors)
            }
        }
    }

    fn form(&self) -> MutexGuard<'_, AdmissionForm> {
        lock_form(&self.form)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "transport panicked".to_string()
    }
}

/// A panic elsewhere must not wedge the form, so poisoning is ignored.
fn lock_form(form: &Mutex<AdmissionForm>) -> MutexGuard<'_, AdmissionForm> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}
