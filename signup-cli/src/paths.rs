//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "signup";
const APPLICATION: &str = "signup-form";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the path to the form settings file.
///
/// - Linux: `$XDG_CONFIG_HOME/signup-form/signup.json`
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("signup.json"))
}

/// Get the path to the log file, falling back to the working directory.
pub fn log_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().join("latest.log"))
        .unwrap_or_else(|| PathBuf::from("signup.log"))
}
