//! Field validation for the signup form.
//!
//! Validation is split in two steps: a pure check that turns a field value
//! into a [`ValidationResult`], and [`render`] which writes that result onto
//! a [`Validatable`] field.
//!
//! # Example
//!
//! ```
//! use signup_form::validation::Check;
//!
//! let result = Check::new("  ab ")
//!     .required("Username cannot be blank.")
//!     .length_between(3, 25, "Username must be between 3 and 25 characters.")
//!     .result();
//!
//! assert_eq!(result.message(), Some("Username must be between 3 and 25 characters."));
//! ```

mod predicates;
mod result;
mod validatable;
mod validator;

pub use predicates::{is_between_length, is_email_valid, is_password_secure, is_required};
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{
    CONFIRM_BLANK, CONFIRM_MISMATCH, Check, EMAIL_BLANK, EMAIL_INVALID, PASSWORD_BLANK,
    PASSWORD_INSECURE, USERNAME_BLANK, check_confirm_password, check_email, check_password,
    check_username, render,
};
