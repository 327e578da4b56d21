//! Per-field validators built on a short-circuiting rule chain.

use super::predicates::{is_between_length, is_email_valid, is_password_secure, is_required};
use super::result::ValidationResult;
use super::validatable::Validatable;
use crate::config::FormConfig;

pub const USERNAME_BLANK: &str = "Username cannot be blank.";
pub const EMAIL_BLANK: &str = "Email cannot be blank.";
pub const EMAIL_INVALID: &str = "Email is not valid.";
pub const PASSWORD_BLANK: &str = "Password cannot be blank.";
pub const PASSWORD_INSECURE: &str = "Password must have at least 8 characters that include \
    at least 1 lowercase character, 1 uppercase character, 1 number, \
    and 1 special character in (!@#$%^&*).";
pub const CONFIRM_BLANK: &str = "Please enter the password again.";
pub const CONFIRM_MISMATCH: &str = "The password does not match.";

/// Rule chain over a single trimmed value.
///
/// Rules run in order and the first failure wins: once a rule fails, later
/// rules are skipped and their messages are never built into the result.
///
/// # Example
///
/// ```
/// use signup_form::validation::Check;
///
/// let result = Check::new("")
///     .required("Email cannot be blank.")
///     .email("Email is not valid.")
///     .result();
/// assert_eq!(result.message(), Some("Email cannot be blank."));
/// ```
#[derive(Debug, Clone)]
pub struct Check<'a> {
    value: &'a str,
    failure: Option<String>,
}

impl<'a> Check<'a> {
    /// Start a chain; the value is trimmed once here.
    pub fn new(value: &'a str) -> Self {
        Self {
            value: value.trim(),
            failure: None,
        }
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&str) -> bool,
    {
        if self.failure.is_none() && !f(self.value) {
            self.failure = Some(msg.into());
        }
        self
    }

    /// Require the value to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(is_required, msg)
    }

    /// Require the length in characters to lie within `min..=max`.
    pub fn length_between(self, min: usize, max: usize, msg: impl Into<String>) -> Self {
        self.rule(|v| is_between_length(v.chars().count(), min, max), msg)
    }

    /// Require a well-formed email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(is_email_valid, msg)
    }

    /// Require a strong password.
    pub fn secure_password(self, msg: impl Into<String>) -> Self {
        self.rule(is_password_secure, msg)
    }

    /// Require the value to equal `other` (trimmed).
    pub fn equals(self, other: &str, msg: impl Into<String>) -> Self {
        let other = other.trim();
        self.rule(|v| v == other, msg)
    }

    /// Finish the chain.
    pub fn result(self) -> ValidationResult {
        match self.failure {
            Some(msg) => ValidationResult::Invalid(msg),
            None => ValidationResult::Valid,
        }
    }
}

pub fn check_username(value: &str, config: &FormConfig) -> ValidationResult {
    let (min, max) = (config.username_min, config.username_max);
    Check::new(value)
        .required(USERNAME_BLANK)
        .length_between(
            min,
            max,
            format!("Username must be between {min} and {max} characters."),
        )
        .result()
}

pub fn check_email(value: &str) -> ValidationResult {
    Check::new(value)
        .required(EMAIL_BLANK)
        .email(EMAIL_INVALID)
        .result()
}

pub fn check_password(value: &str) -> ValidationResult {
    Check::new(value)
        .required(PASSWORD_BLANK)
        .secure_password(PASSWORD_INSECURE)
        .result()
}

/// Checks the confirmation against the (trimmed) password value.
pub fn check_confirm_password(value: &str, password: &str) -> ValidationResult {
    Check::new(value)
        .required(CONFIRM_BLANK)
        .equals(password, CONFIRM_MISMATCH)
        .result()
}

/// Write a result onto a field. Returns whether the result was valid.
pub fn render<W: Validatable>(widget: &W, result: &ValidationResult) -> bool {
    log::trace!("render {}: {:?}", widget.field_id(), result);
    match result {
        ValidationResult::Valid => {
            widget.show_success();
            true
        }
        ValidationResult::Invalid(msg) => {
            widget.show_error(msg.clone());
            false
        }
    }
}
