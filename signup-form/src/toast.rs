use std::sync::{Arc, Mutex, MutexGuard};

/// Kind of popup: styles the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A popup notification with a title line and a body line.
///
/// # Example
///
/// ```
/// use signup_form::{Toast, ToastLevel};
///
/// let toast = Toast::success("Welcome Aboard!", "registered successfully");
/// assert_eq!(toast.level, ToastLevel::Success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title, body)
    }

    fn new(level: ToastLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
        }
    }
}

/// Receiver of toasts: the popup mechanism of whatever front end hosts the form.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Buffer of toasts waiting to be shown.
///
/// Front ends drain it on their own schedule.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    pending: Arc<Mutex<Vec<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        self.lock().push(toast);
    }
}
