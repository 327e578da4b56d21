//! Validatable trait for fields that display validation state.

use crate::field::{FieldId, FieldStatus};

/// A form field that can be checked and can show the outcome.
///
/// Implementations must keep exactly one of the error/success states: showing
/// one clears the other.
pub trait Validatable: Send + Sync {
    /// Which form field this is.
    fn field_id(&self) -> FieldId;

    /// Current raw value, untrimmed.
    fn validation_value(&self) -> String;

    /// Mark the field as failed and display `msg`.
    fn show_error(&self, msg: impl Into<String>);

    /// Mark the field as passed and clear any message.
    fn show_success(&self);

    /// Return the field to its unchecked state.
    fn reset(&self);

    /// Current display state.
    fn status(&self) -> FieldStatus;

    /// Current error message (if any).
    fn error(&self) -> Option<String>;
}
