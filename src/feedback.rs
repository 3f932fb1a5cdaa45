//! Feedback form validation and submission state
//!
//! The two field validators are pure functions re-run on every change to
//! their field and again at submit time, so stale error state never decides
//! whether the confirmation dialog opens.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum accepted length of the name field, in characters
pub const NAME_MAX_LEN: usize = 50;

/// Email-shape grammar, applied to the lower-cased value.
///
/// Local part excludes `<>()[]\.,;:` whitespace `@` and `"` unless the whole
/// part is quoted; the domain is either a bracketed dotted-quad or a sequence
/// of label segments ending in a top-level label of at least two characters.
/// The pattern is the documented grammar and is kept verbatim.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|.(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email grammar must compile")
});

/// Named validation outcomes for the feedback form fields
///
/// These are user-correctable input conditions, not failures; each carries
/// its fixed message and is surfaced inline next to the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Maximum name length is 50")]
    NameTooLong,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is not valid")]
    EmailInvalidFormat,
}

/// Validate the name field
pub fn validate_name(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::NameRequired);
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Some(FieldError::NameTooLong);
    }
    None
}

/// Validate the email field
pub fn validate_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(&value.to_lowercase()) {
        return Some(FieldError::EmailInvalidFormat);
    }
    None
}

/// Whether a submit attempt with the current values would succeed
pub fn can_submit(name: &str, email: &str) -> bool {
    validate_name(name).is_none() && validate_email(email).is_none()
}

/// Submission state machine
///
/// ```text
/// Editing -> Validating   on submit attempt (both fields re-validated)
/// Validating -> Confirmed iff both fields valid (dialog opens)
/// Validating -> Editing   otherwise (errors now visible)
/// Confirmed -> Editing    when the confirmation is dismissed
/// ```
///
/// There is no terminal state; the cycle repeats. `Validating` is the
/// intermediate step inside [`FeedbackForm::submit`] and is never observable
/// once the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// User is editing field values
    #[default]
    Editing,
    /// A submit attempt is re-validating the current values
    Validating,
    /// Both fields were valid at submit time; the confirmation dialog is open
    Confirmed,
}

/// Mutable feedback form state owned by the presentation surface
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    /// Name field value, required, max 50 characters
    pub name: String,
    /// Email field value, required, must match the email-shape grammar
    pub email: String,
    /// Free-text feedback, optional and unconstrained
    pub feedback: String,
    /// Derived name error, recomputed on each change to the name field
    pub name_error: Option<FieldError>,
    /// Derived email error, recomputed on each change to the email field
    pub email_error: Option<FieldError>,
    state: SubmitState,
}

impl FeedbackForm {
    /// Create an empty form in the Editing state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current submission state
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Whether the confirmation dialog is open
    pub fn dialog_open(&self) -> bool {
        self.state == SubmitState::Confirmed
    }

    /// Re-validate the name field against its current value
    pub fn touch_name(&mut self) {
        self.name_error = validate_name(&self.name);
    }

    /// Re-validate the email field against its current value
    pub fn touch_email(&mut self) {
        self.email_error = validate_email(&self.email);
    }

    /// Perform a submit attempt
    ///
    /// Both fields are re-validated against their current values; the dialog
    /// opens only when both come back clean. Returns whether it did.
    pub fn submit(&mut self) -> bool {
        self.state = SubmitState::Validating;
        self.touch_name();
        self.touch_email();

        if self.name_error.is_none() && self.email_error.is_none() {
            self.state = SubmitState::Confirmed;
            true
        } else {
            self.state = SubmitState::Editing;
            false
        }
    }

    /// Dismiss the confirmation dialog
    ///
    /// Only the dialog visibility resets; field values are retained.
    pub fn dismiss(&mut self) {
        if self.state == SubmitState::Confirmed {
            self.state = SubmitState::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_messages() {
        assert_eq!(
            validate_name("").map(|e| e.to_string()),
            Some("Name is required".to_string())
        );
        assert_eq!(
            validate_name(&"a".repeat(51)).map(|e| e.to_string()),
            Some("Maximum name length is 50".to_string())
        );
        assert_eq!(validate_name("Alice"), None);
        assert_eq!(validate_name(&"a".repeat(50)), None);
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(validate_email(""), Some(FieldError::EmailRequired));
        assert_eq!(
            validate_email("not-an-email"),
            Some(FieldError::EmailInvalidFormat)
        );
        assert_eq!(validate_email("a@b.co"), None);
        assert_eq!(validate_email("Alice@Example.COM"), None);
    }

    #[test]
    fn test_email_grammar_edges() {
        // single-letter top-level label is rejected
        assert_eq!(validate_email("a@b.c"), Some(FieldError::EmailInvalidFormat));
        // bracketed dotted-quad domain is accepted
        assert_eq!(validate_email("user@[127.0.0.1]"), None);
        // whitespace in local part is rejected
        assert_eq!(
            validate_email("a b@example.com"),
            Some(FieldError::EmailInvalidFormat)
        );
        // missing domain dot is rejected
        assert_eq!(
            validate_email("user@localhost"),
            Some(FieldError::EmailInvalidFormat)
        );
    }

    #[test]
    fn test_dialog_only_opens_when_clean() {
        let mut form = FeedbackForm::new();
        form.name = "Alice".to_string();
        form.email = "bad".to_string();
        assert!(!form.submit());
        assert!(!form.dialog_open());
        assert_eq!(form.email_error, Some(FieldError::EmailInvalidFormat));

        form.email = "alice@example.com".to_string();
        assert!(form.submit());
        assert!(form.dialog_open());
        assert!(form.name_error.is_none());
        assert!(form.email_error.is_none());
    }

    #[test]
    fn test_dismiss_keeps_values() {
        let mut form = FeedbackForm::new();
        form.name = "Alice".to_string();
        form.email = "alice@example.com".to_string();
        form.feedback = "great list".to_string();
        assert!(form.submit());

        form.dismiss();
        assert_eq!(form.state(), SubmitState::Editing);
        assert_eq!(form.name, "Alice");
        assert_eq!(form.email, "alice@example.com");
        assert_eq!(form.feedback, "great list");
    }
}
