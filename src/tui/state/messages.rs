//! Popup messages shared by every screen
//!
//! Validation and auth failures land here; so do the confirmations for
//! sign-up and reset requests.

use ratatui::{layout::Rect, Frame};

use crate::tui::widgets::ModalDialog;

/// Holds at most one message, error or success
///
/// # Example
/// ```
/// use authlist::tui::state::MessageDisplay;
///
/// let mut messages = MessageDisplay::default();
/// messages.set_error("Passwords do not match");
/// assert_eq!(messages.error(), Some("Passwords do not match"));
///
/// messages.clear();
/// assert!(!messages.has_message());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MessageDisplay {
    error: Option<String>,
    success: Option<String>,
}

impl MessageDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an error message, clearing any existing success message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    /// Set a success message, clearing any existing error message
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn has_message(&self) -> bool {
        self.error.is_some() || self.success.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Render the current message as a centered popup, if there is one
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(msg) = &self.error {
            ModalDialog::error(msg.clone()).render(frame, area);
        } else if let Some(msg) = &self.success {
            ModalDialog::success(msg.clone()).render(frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let msg = MessageDisplay::new();
        assert!(!msg.has_message());
        assert_eq!(msg.error(), None);
        assert_eq!(msg.success(), None);
    }

    #[test]
    fn test_set_success_clears_error() {
        let mut msg = MessageDisplay::default();
        msg.set_error("Email is required");
        msg.set_success("Reset link sent");
        assert_eq!(msg.error(), None);
        assert_eq!(msg.success(), Some("Reset link sent"));
    }

    #[test]
    fn test_set_error_clears_success() {
        let mut msg = MessageDisplay::default();
        msg.set_success("Account created");
        msg.set_error("Passwords do not match");
        assert_eq!(msg.success(), None);
        assert_eq!(msg.error(), Some("Passwords do not match"));
    }

    #[test]
    fn test_clear() {
        let mut msg = MessageDisplay::default();
        msg.set_error("boom");
        msg.clear();
        assert!(!msg.has_message());
    }
}
