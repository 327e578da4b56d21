//! Loads the form configuration from the settings file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use signup_form::FormConfig;

use crate::error::CliError;
use crate::paths;

/// Read the settings file if there is one; defaults otherwise.
pub fn load() -> Result<FormConfig, CliError> {
    match paths::settings_file() {
        Some(path) => load_from(&path),
        None => Ok(FormConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<FormConfig, CliError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(FormConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: FormConfig = serde_json::from_str(&text)?;
    config.validate()?;
    log::info!("Loaded settings from {}", path.display());
    Ok(config)
}
