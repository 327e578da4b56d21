//! Error types

use thiserror::Error;

/// Errors raised by the form plumbing.
///
/// Invalid user input is never a `FormError`; it is reported as a
/// [`ValidationResult::Invalid`](crate::validation::ValidationResult) and
/// rendered on the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// An event targeted an id that is not one of the form's fields.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// A tokio scheduler was requested outside of a runtime.
    #[error("No tokio runtime available for scheduling")]
    NoRuntime,

    /// The configuration is inconsistent.
    #[error("Invalid form configuration: {0}")]
    InvalidConfig(String),
}
