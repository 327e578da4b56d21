use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::field::{FieldId, FieldStatus};
use crate::validation::Validatable;

/// Internal state for an Input field
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value
    value: String,
    /// Display state from the last check
    status: FieldStatus,
    /// Error text; empty unless `status` is `Error`
    message: String,
}

/// A text field with its validation display state.
///
/// `Input` is cheap to clone: clones share the same underlying state, so a
/// handle can be held by the form while front ends and debounced tasks read
/// and write it.
///
/// # Example
///
/// ```
/// use signup_form::{FieldId, FieldStatus, Input};
/// use signup_form::validation::Validatable;
///
/// let username = Input::new(FieldId::Username);
/// username.set_value("alice");
/// username.show_error("taken");
/// assert_eq!(username.status(), FieldStatus::Error);
///
/// username.show_success();
/// assert_eq!(username.message(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Input {
    id: FieldId,
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Input {
    /// Create a new empty input
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input with an initial value
    pub fn with_value(id: FieldId, value: impl Into<String>) -> Self {
        let input = Self::new(id);
        input.set_value(value);
        input
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the current text value
    pub fn value(&self) -> String {
        self.read(|inner| inner.value.clone())
    }

    /// Replace the text value. Display state is left alone until the next check.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        self.write(|inner| inner.value = value);
    }

    /// The text shown under the field; empty unless in error.
    pub fn message(&self) -> String {
        self.read(|inner| inner.message.clone())
    }

    /// Check if the input has changed since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn read<T>(&self, f: impl FnOnce(&InputInner) -> T) -> T {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write(&self, f: impl FnOnce(&mut InputInner)) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Validatable for Input {
    fn field_id(&self) -> FieldId {
        self.id
    }

    fn validation_value(&self) -> String {
        self.value()
    }

    fn show_error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        self.write(|inner| {
            inner.status = FieldStatus::Error;
            inner.message = msg;
        });
    }

    fn show_success(&self) {
        self.write(|inner| {
            inner.status = FieldStatus::Success;
            inner.message.clear();
        });
    }

    fn reset(&self) {
        self.write(|inner| *inner = InputInner::default());
    }

    fn status(&self) -> FieldStatus {
        self.read(|inner| inner.status)
    }

    fn error(&self) -> Option<String> {
        self.read(|inner| (inner.status == FieldStatus::Error).then(|| inner.message.clone()))
    }
}
