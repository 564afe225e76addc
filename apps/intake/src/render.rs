//! # Terminal Rendering
//!
//! Plain-text rendering of form pieces, plus the queue that holds
//! notifications until the prompt loop draws them.

use std::sync::Mutex;

use admission_client::{FieldView, Notification, Notifier, SubmitButton};

pub const TITLE: &str = "Admission Application Form";
pub const INTRO: &str = "Take the first step towards your academic excellence. \
Fill out the form below to apply.";
pub const REQUIRED_NOTE: &str =
    "Please provide accurate information. All fields marked with * are required.";
pub const HELP: &str =
    "Need assistance? Contact us via WhatsApp or email provided on our website.";

/// Banner printed once at startup.
pub fn header() -> String {
    format!("{TITLE}\n{}\n{INTRO}\n\n{REQUIRED_NOTE}\n", "=".repeat(TITLE.len()))
}

/// Prompt for one input, with its inline error beneath the label.
pub fn field_prompt(view: &FieldView) -> String {
    let mut out = format!("\n{}\n", view.label);
    if let Some(error) = &view.error {
        out.push_str(&format!("  ! {error}\n"));
    }
    if !view.value.is_empty() {
        out.push_str(&format!("  (was: {})\n", view.value));
    }
    out.push_str(&format!("  [{}] > ", view.placeholder));
    out
}

/// Submit action, with a spinner glyph while busy.
pub fn submit_button(button: &SubmitButton) -> String {
    if button.busy {
        format!("⟳ {}", button.label)
    } else {
        format!("[ {} ]", button.label)
    }
}

pub fn notification(n: &Notification) -> String {
    let mark = if n.is_destructive() { '✗' } else { '✓' };
    format!("{mark} {}: {}", n.title, n.description)
}

/// Reads a yes/no answer; empty or unrecognized input takes `default`.
pub fn parse_yes_no(line: &str, default: bool) -> bool {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Notifier that holds notifications for the prompt loop to draw.
#[derive(Default)]
pub struct ToastQueue {
    pending: Mutex<Vec<Notification>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *pending)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: &Notification) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admission_core::{Field, InputKind};

    fn view(error: Option<&str>, value: &str) -> FieldView {
        FieldView {
            field: Field::Faculty,
            label: Field::Faculty.label(),
            placeholder: Field::Faculty.placeholder(),
            input_kind: InputKind::Text,
            value: value.to_string(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_field_prompt_shows_error_under_label() {
        let text = field_prompt(&view(Some("Faculty is required"), "S"));
        let label_at = text.find("Faculty *").unwrap();
        let error_at = text.find("! Faculty is required").unwrap();
        assert!(label_at < error_at);
        assert!(text.contains("(was: S)"));
        assert!(text.ends_with("[e.g., Science, Arts, Engineering] > "));
    }

    #[test]
    fn test_field_prompt_without_error() {
        let text = field_prompt(&view(None, ""));
        assert!(!text.contains('!'));
        assert!(!text.contains("was:"));
    }

    #[test]
    fn test_busy_button_has_spinner() {
        let busy = SubmitButton {
            label: "Submitting...",
            disabled: true,
            busy: true,
        };
        assert_eq!(submit_button(&busy), "⟳ Submitting...");
    }

    #[test]
    fn test_notification_marks() {
        assert!(notification(&Notification::submitted()).starts_with('✓'));
        assert!(notification(&Notification::submission_failed()).starts_with('✗'));
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("Y", false));
        assert!(parse_yes_no(" yes ", false));
        assert!(!parse_yes_no("n", true));
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("maybe", false));
    }

    #[test]
    fn test_toast_queue_drains_in_order() {
        let queue = ToastQueue::new();
        queue.notify(&Notification::submission_failed());
        queue.notify(&Notification::submitted());

        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![Notification::submission_failed(), Notification::submitted()]
        );
        assert!(queue.drain().is_empty());
    }
}
