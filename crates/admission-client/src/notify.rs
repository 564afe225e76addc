//! # Notifications
//!
//! Transient, non-blocking feedback shown after a submission settles.
//! How a notification is drawn (toast, status line, log) belongs to the
//! front end; this module only says what to show.

use serde::Serialize;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failure styling.
    Destructive,
}

/// One toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    /// Shown once after a 2xx response.
    pub fn submitted() -> Self {
        Notification {
            title: "Success!".to_string(),
            description: "Your admission form has been submitted successfully.".to_string(),
            variant: NotificationVariant::Default,
        }
    }

    /// Shown once for any failed submission. Never carries the status code
    /// or transport detail.
    pub fn submission_failed() -> Self {
        Notification {
            title: "Error".to_string(),
            description: "Failed to submit the form. Please try again.".to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Trait for presenting notifications (implemented by the front end).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// No-op notifier for headless use.
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _notification: &Notification) {}
}
