//! Pure predicates over field values.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern is valid")
});

// Every pattern must match somewhere in the value.
static PASSWORD: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([r"[a-z]", r"[A-Z]", r"[0-9]", r"[!@#$%^&*]", r".{8,}"])
        .expect("password patterns are valid")
});

/// Returns `false` if the value is empty or whitespace only.
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns `true` if `min <= length <= max`.
pub fn is_between_length(length: usize, min: usize, max: usize) -> bool {
    (min..=max).contains(&length)
}

/// Permissive RFC 5322-style address check.
///
/// Accepts dot-separated unquoted atoms or a quoted string as the local
/// part, and either a bracketed IPv4 literal or a hostname ending in an
/// alphabetic label of two or more characters.
pub fn is_email_valid(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Requires a lowercase letter, an uppercase letter, a digit, one of
/// `!@#$%^&*` and at least eight characters.
pub fn is_password_secure(value: &str) -> bool {
    PASSWORD.matches(value).matched_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(!is_required(""));
        assert!(!is_required("   "));
        assert!(is_required(" a "));
    }

    #[test]
    fn test_between_length_is_inclusive() {
        assert!(is_between_length(3, 3, 25));
        assert!(is_between_length(25, 3, 25));
        assert!(!is_between_length(2, 3, 25));
        assert!(!is_between_length(26, 3, 25));
    }

    #[test]
    fn test_email() {
        assert!(is_email_valid("a@b.com"));
        assert!(is_email_valid("first.last@mail.example.org"));
        assert!(is_email_valid("a@[192.168.1.1]"));
        assert!(!is_email_valid("a@@b.com"));
        assert!(!is_email_valid("a@b"));
        assert!(!is_email_valid("a@b.c"));
        assert!(!is_email_valid("a b@c.com"));
        assert!(!is_email_valid(".a@b.com"));
        assert!(!is_email_valid("a@b.c0m"));
    }

    #[test]
    fn test_quoted_local_part() {
        assert!(is_email_valid("\"john doe\"@example.com"));
    }

    #[test]
    fn test_password() {
        assert!(is_password_secure("Abcdef1!"));
        assert!(is_password_secure("!1fedcbA"));
        assert!(!is_password_secure("abcdef1!"));
        assert!(!is_password_secure("ABCDEF1!"));
        assert!(!is_password_secure("Abcdefg!"));
        assert!(!is_password_secure("Abcdefg1"));
        assert!(!is_password_secure("Abc1!"));
    }
}
