//! Form context and controller.
//!
//! The [`FormController`] owns the wiring between UI events and the field
//! validators:
//!
//! - `submit` checks every field, renders each result, and sends a single
//!   outcome toast to the [`Notifier`].
//! - `input` is debounced; after the quiet period it checks the one field
//!   the event targeted.

use std::sync::Arc;

use log::{debug, info};

use crate::config::FormConfig;
use crate::debounce::Debouncer;
use crate::error::FormError;
use crate::field::FieldId;
use crate::input::Input;
use crate::scheduler::Scheduler;
use crate::toast::{Notifier, Toast};
use crate::validation::{
    FieldError, ValidationResult, check_confirm_password, check_email, check_password,
    check_username, render,
};

pub const SUCCESS_TITLE: &str = "Welcome Aboard!";
pub const SUCCESS_BODY: &str = "registered successfully";
pub const FAILURE_TITLE: &str = "Oops!";
pub const FAILURE_BODY: &str = "Invalid registration details...";

/// Handles to the four signup fields.
#[derive(Debug, Clone)]
pub struct FormContext {
    username: Input,
    email: Input,
    password: Input,
    confirm_password: Input,
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormContext {
    /// Create a form with four empty fields.
    pub fn new() -> Self {
        Self::from_inputs(
            Input::new(FieldId::Username),
            Input::new(FieldId::Email),
            Input::new(FieldId::Password),
            Input::new(FieldId::ConfirmPassword),
        )
    }

    /// Build a form around existing field handles.
    pub fn from_inputs(
        username: Input,
        email: Input,
        password: Input,
        confirm_password: Input,
    ) -> Self {
        Self {
            username,
            email,
            password,
            confirm_password,
        }
    }

    pub fn field(&self, id: FieldId) -> &Input {
        match id {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    /// All fields, in form order.
    pub fn fields(&self) -> [&Input; 4] {
        FieldId::ALL.map(|id| self.field(id))
    }

    /// Check one field against the live values, without rendering.
    pub fn check(&self, id: FieldId, config: &FormConfig) -> ValidationResult {
        let value = self.field(id).value();
        match id {
            FieldId::Username => check_username(&value, config),
            FieldId::Email => check_email(&value),
            FieldId::Password => check_password(&value),
            FieldId::ConfirmPassword => check_confirm_password(&value, &self.password.value()),
        }
    }

    /// Check one field and render the result on it.
    pub fn validate(&self, id: FieldId, config: &FormConfig) -> bool {
        render(self.field(id), &self.check(id, config))
    }

    /// Clear all values and display state.
    pub fn reset(&self) {
        use crate::validation::Validatable;

        for input in self.fields() {
            input.reset();
        }
    }
}

/// A form submission.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from performing its default submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Text changed in the element with id `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub target: String,
}

impl InputEvent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl From<FieldId> for InputEvent {
    fn from(id: FieldId) -> Self {
        Self::new(id.as_str())
    }
}

/// Result of a submit attempt. Valid iff no field failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOutcome {
    errors: Vec<FieldError>,
}

impl FormOutcome {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed fields, in form order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// The field a front end should focus after a failed submit.
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        self.first_error().map(|e| e.field)
    }

    /// The toast announcing this outcome.
    pub fn toast(&self) -> Toast {
        if self.is_success() {
            Toast::success(SUCCESS_TITLE, SUCCESS_BODY)
        } else {
            Toast::error(FAILURE_TITLE, FAILURE_BODY)
        }
    }
}

/// Wires submit and input events to the field validators.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use signup_form::prelude::*;
///
/// let toasts = ToastQueue::new();
/// let controller = FormController::new(
///     FormContext::new(),
///     Arc::new(toasts.clone()),
///     Arc::new(ManualScheduler::new()),
///     FormConfig::default(),
/// )
/// .unwrap();
///
/// let mut event = SubmitEvent::new();
/// let outcome = controller.submit(&mut event);
/// assert!(!outcome.is_success());
/// assert!(event.default_prevented());
/// assert_eq!(toasts.drain()[0].title, "Oops!");
/// ```
pub struct FormController {
    form: FormContext,
    config: Arc<FormConfig>,
    notifier: Arc<dyn Notifier>,
    on_input: Debouncer<InputEvent>,
}

impl FormController {
    /// Create a controller. Fails if `config` is inconsistent.
    pub fn new(
        form: FormContext,
        notifier: Arc<dyn Notifier>,
        scheduler: Arc<dyn Scheduler>,
        config: FormConfig,
    ) -> Result<Self, FormError> {
        config.validate()?;
        let config = Arc::new(config);

        let on_input = {
            let form = form.clone();
            let config = Arc::clone(&config);
            Debouncer::new(
                scheduler,
                config.debounce_delay(),
                move |event: InputEvent| match event.target.parse::<FieldId>() {
                    Ok(id) => {
                        debug!("Validating '{}' after input", id);
                        form.validate(id, &config);
                    }
                    Err(e) => debug!("Ignoring input event: {}", e),
                },
            )
        };

        Ok(Self {
            form,
            config,
            notifier,
            on_input,
        })
    }

    pub fn form(&self) -> &FormContext {
        &self.form
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Check every field, render each result and announce the outcome.
    ///
    /// The event's default action is always prevented.
    pub fn submit(&self, event: &mut SubmitEvent) -> FormOutcome {
        event.prevent_default();

        let errors = FieldId::ALL
            .into_iter()
            .filter_map(|id| {
                let result = self.form.check(id, &self.config);
                render(self.form.field(id), &result);
                match result {
                    ValidationResult::Valid => None,
                    ValidationResult::Invalid(msg) => Some(FieldError::new(id, msg)),
                }
            })
            .collect();
        let outcome = FormOutcome { errors };

        if outcome.is_success() {
            info!("Signup form submitted");
        } else {
            info!(
                "Signup form rejected: {} invalid field(s)",
                outcome.errors().len()
            );
        }
        self.notifier.notify(outcome.toast());
        outcome
    }

    /// Debounced re-check of the field the event targets.
    ///
    /// Every event restarts the quiet period, including events for ids that
    /// are not form fields; those are dropped when the timer fires.
    pub fn input(&self, event: impl Into<InputEvent>) {
        self.on_input.call(event.into());
    }

    /// Check a single field right away.
    pub fn validate_now(&self, id: FieldId) -> bool {
        self.form.validate(id, &self.config)
    }

    /// Whether a debounced check is waiting to run.
    pub fn has_pending_input(&self) -> bool {
        self.on_input.is_pending()
    }

    /// Cancel any pending check and clear the form.
    pub fn reset(&self) {
        self.on_input.cancel_pending();
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldStatus;
    use crate::validation::Validatable;

    fn filled() -> FormContext {
        FormContext::from_inputs(
            Input::with_value(FieldId::Username, "alice"),
            Input::with_value(FieldId::Email, "alice@example.com"),
            Input::with_value(FieldId::Password, "Password1!"),
            Input::with_value(FieldId::ConfirmPassword, "Password1!"),
        )
    }

    #[test]
    fn test_check_does_not_render() {
        let form = filled();
        assert!(form.check(FieldId::Username, &FormConfig::default()).is_valid());
        assert_eq!(form.field(FieldId::Username).status(), FieldStatus::Neutral);
    }

    #[test]
    fn test_confirm_reads_live_password() {
        let form = filled();
        let config = FormConfig::default();
        assert!(form.validate(FieldId::ConfirmPassword, &config));

        form.field(FieldId::Password).set_value("Password2!");
        assert!(!form.validate(FieldId::ConfirmPassword, &config));
        assert_eq!(
            form.field(FieldId::ConfirmPassword).error().as_deref(),
            Some("The password does not match.")
        );
    }

    #[test]
    fn test_outcome_toasts() {
        let ok = FormOutcome::default();
        assert_eq!(ok.toast().title, SUCCESS_TITLE);
        assert_eq!(ok.toast().body, SUCCESS_BODY);

        let failed = FormOutcome {
            errors: vec![FieldError::new(FieldId::Email, "Email is not valid.")],
        };
        assert_eq!(failed.toast().title, FAILURE_TITLE);
        assert_eq!(failed.first_invalid_field(), Some(FieldId::Email));
    }
}
