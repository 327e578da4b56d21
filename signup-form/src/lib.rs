//! Client-side validation for a four-field signup form.
//!
//! Fields are checked by pure validators, the results are rendered onto
//! shared [`Input`] handles, and a [`FormController`] gates submission and
//! re-checks fields as the user types through a [`Debouncer`].
//!
//! [`Debouncer`]: debounce::Debouncer

pub mod config;
pub mod debounce;
pub mod error;
pub mod field;
pub mod form;
pub mod input;
pub mod scheduler;
pub mod toast;
pub mod validation;

pub use config::FormConfig;
pub use error::FormError;
pub use field::{FieldId, FieldStatus};
pub use form::{FormContext, FormController, FormOutcome, InputEvent, SubmitEvent};
pub use input::Input;
pub use toast::{Notifier, Toast, ToastLevel, ToastQueue};

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::debounce::Debouncer;
    pub use crate::error::FormError;
    pub use crate::field::{FieldId, FieldStatus};
    pub use crate::form::{FormContext, FormController, FormOutcome, InputEvent, SubmitEvent};
    pub use crate::input::Input;
    pub use crate::scheduler::{ManualScheduler, Scheduler, TimerHandle, TokioScheduler};
    pub use crate::toast::{Notifier, Toast, ToastLevel, ToastQueue};
    pub use crate::validation::{Validatable, ValidationResult};
}
