//! Field identity and display state.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One of the four signup form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in form order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Username,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// The element id used by events targeting this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm-password",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Visual state of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not validated yet.
    #[default]
    Neutral,
    /// Last check failed; an error message is shown.
    Error,
    /// Last check passed.
    Success,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_ids() {
        assert_eq!("username".parse(), Ok(FieldId::Username));
        assert_eq!("confirm-password".parse(), Ok(FieldId::ConfirmPassword));
        assert_eq!(
            "phone".parse::<FieldId>(),
            Err(FormError::UnknownField("phone".into()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for id in FieldId::ALL {
            assert_eq!(id.to_string().parse(), Ok(id));
        }
    }
}
