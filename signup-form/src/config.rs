//! Form configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Tunables for validation and reactive re-checking.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use signup_form::FormConfig;
///
/// let config = FormConfig::default()
///     .with_debounce(Duration::from_millis(250))
///     .with_username_length(4, 16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Quiet period before an input event is validated, in milliseconds.
    ///
    /// Default: 500
    pub debounce_ms: u64,

    /// Minimum username length (inclusive).
    ///
    /// Default: 3
    pub username_min: usize,

    /// Maximum username length (inclusive).
    ///
    /// Default: 25
    pub username_max: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            username_min: 3,
            username_max: 25,
        }
    }
}

impl FormConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debounce delay.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the inclusive username length bounds.
    pub fn with_username_length(mut self, min: usize, max: usize) -> Self {
        self.username_min = min;
        self.username_max = max;
        self
    }

    /// The debounce delay as a `Duration`.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Checks that the bounds are consistent.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username_min > self.username_max {
            return Err(FormError::InvalidConfig(format!(
                "username_min ({}) exceeds username_max ({})",
                self.username_min, self.username_max
            )));
        }
        Ok(())
    }
}
