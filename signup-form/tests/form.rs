use std::sync::Arc;
use std::time::Duration;

use signup_form::prelude::*;
use signup_form::validation::{CONFIRM_MISMATCH, USERNAME_BLANK};

struct Harness {
    controller: FormController,
    clock: ManualScheduler,
    toasts: ToastQueue,
}

fn harness() -> Harness {
    let clock = ManualScheduler::new();
    let toasts = ToastQueue::new();
    let controller = FormController::new(
        FormContext::new(),
        Arc::new(toasts.clone()),
        Arc::new(clock.clone()),
        FormConfig::default(),
    )
    .unwrap();
    Harness {
        controller,
        clock,
        toasts,
    }
}

fn fill(form: &FormContext, values: [&str; 4]) {
    for (id, value) in FieldId::ALL.into_iter().zip(values) {
        form.field(id).set_value(value);
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_submit_valid_form() {
    let h = harness();
    let form = h.controller.form();
    fill(form, ["alice", "alice@example.com", "Password1!", "Password1!"]);

    let mut event = SubmitEvent::new();
    let outcome = h.controller.submit(&mut event);

    assert!(outcome.is_success());
    assert!(event.default_prevented());
    for input in form.fields() {
        assert_eq!(input.status(), FieldStatus::Success);
        assert_eq!(input.message(), "");
    }

    let toasts = h.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].title, "Welcome Aboard!");
    assert_eq!(toasts[0].body, "registered successfully");
}

#[test]
fn test_submit_renders_every_field() {
    let h = harness();
    let form = h.controller.form();
    fill(form, ["", "alice@example.com", "Password1!", "Password2!"]);

    let mut event = SubmitEvent::new();
    let outcome = h.controller.submit(&mut event);

    assert!(!outcome.is_success());
    assert!(event.default_prevented());
    assert_eq!(
        outcome
            .errors()
            .iter()
            .map(|e| e.field)
            .collect::<Vec<_>>(),
        vec![FieldId::Username, FieldId::ConfirmPassword]
    );
    assert_eq!(outcome.first_invalid_field(), Some(FieldId::Username));

    assert_eq!(
        form.field(FieldId::Username).error().as_deref(),
        Some(USERNAME_BLANK)
    );
    assert_eq!(form.field(FieldId::Email).status(), FieldStatus::Success);
    assert_eq!(form.field(FieldId::Password).status(), FieldStatus::Success);
    assert_eq!(
        form.field(FieldId::ConfirmPassword).error().as_deref(),
        Some(CONFIRM_MISMATCH)
    );

    let toasts = h.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].title, "Oops!");
    assert_eq!(toasts[0].body, "Invalid registration details...");
}

#[test]
fn test_resubmit_clears_stale_errors() {
    let h = harness();
    let form = h.controller.form();
    fill(form, ["ab", "alice@example.com", "Password1!", "Password1!"]);
    assert!(!h.controller.submit(&mut SubmitEvent::new()).is_success());
    assert_eq!(
        form.field(FieldId::Username).error().as_deref(),
        Some("Username must be between 3 and 25 characters.")
    );

    form.field(FieldId::Username).set_value("alice");
    assert!(h.controller.submit(&mut SubmitEvent::new()).is_success());
    assert_eq!(form.field(FieldId::Username).error(), None);
    assert_eq!(h.toasts.drain().len(), 2);
}

// ============================================================================
// Debounced input
// ============================================================================

#[test]
fn test_input_validates_after_quiet_period() {
    let h = harness();
    let username = h.controller.form().field(FieldId::Username).clone();

    for value in ["a", "al", "ali"] {
        username.set_value(value);
        h.controller.input(FieldId::Username);
        h.clock.advance(ms(100));
    }
    assert_eq!(username.status(), FieldStatus::Neutral);
    assert!(h.controller.has_pending_input());

    h.clock.advance(ms(400));
    assert_eq!(username.status(), FieldStatus::Success);
    assert!(!h.controller.has_pending_input());
    assert!(h.toasts.is_empty());
}

#[test]
fn test_input_uses_value_at_fire_time() {
    let h = harness();
    let username = h.controller.form().field(FieldId::Username).clone();

    username.set_value("ab");
    h.controller.input(FieldId::Username);
    h.clock.advance(ms(500));
    assert_eq!(
        username.error().as_deref(),
        Some("Username must be between 3 and 25 characters.")
    );

    username.set_value("alice");
    h.controller.input(InputEvent::new("username"));
    h.clock.advance(ms(500));
    assert_eq!(username.status(), FieldStatus::Success);
}

#[test]
fn test_password_and_confirmation() {
    let h = harness();
    let form = h.controller.form();
    form.field(FieldId::Password).set_value("Password1!");
    form.field(FieldId::ConfirmPassword).set_value("Password1!");

    assert!(h.controller.validate_now(FieldId::Password));
    assert!(h.controller.validate_now(FieldId::ConfirmPassword));

    form.field(FieldId::ConfirmPassword).set_value("Password2!");
    h.controller.input(FieldId::ConfirmPassword);
    h.clock.advance(ms(500));
    assert_eq!(
        form.field(FieldId::ConfirmPassword).error().as_deref(),
        Some(CONFIRM_MISMATCH)
    );
}

#[test]
fn test_unknown_target_is_ignored() {
    let h = harness();
    h.controller.input(InputEvent::new("phone"));
    h.clock.advance(ms(500));
    for input in h.controller.form().fields() {
        assert_eq!(input.status(), FieldStatus::Neutral);
    }
}

#[test]
fn test_later_event_supersedes_pending_one() {
    let h = harness();
    let form = h.controller.form();
    form.field(FieldId::Username).set_value("ab");
    form.field(FieldId::Email).set_value("bad");

    h.controller.input(FieldId::Username);
    h.clock.advance(ms(200));
    h.controller.input(FieldId::Email);
    h.clock.advance(ms(500));

    assert_eq!(form.field(FieldId::Username).status(), FieldStatus::Neutral);
    assert_eq!(form.field(FieldId::Email).status(), FieldStatus::Error);
}

#[test]
fn test_reset_cancels_pending_validation() {
    let h = harness();
    let form = h.controller.form();
    form.field(FieldId::Email).set_value("bad");
    h.controller.input(FieldId::Email);

    h.controller.reset();
    h.clock.advance(ms(1000));

    assert_eq!(form.field(FieldId::Email).value(), "");
    assert_eq!(form.field(FieldId::Email).status(), FieldStatus::Neutral);
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn test_custom_debounce_delay() {
    let clock = ManualScheduler::new();
    let controller = FormController::new(
        FormContext::new(),
        Arc::new(ToastQueue::new()),
        Arc::new(clock.clone()),
        FormConfig::default().with_debounce(ms(50)),
    )
    .unwrap();
    controller.input(FieldId::Email);
    clock.advance(ms(50));
    assert_eq!(
        controller.form().field(FieldId::Email).status(),
        FieldStatus::Error
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = FormController::new(
        FormContext::new(),
        Arc::new(ToastQueue::new()),
        Arc::new(ManualScheduler::new()),
        FormConfig::default().with_username_length(30, 3),
    );
    assert!(matches!(result, Err(FormError::InvalidConfig(_))));
}
