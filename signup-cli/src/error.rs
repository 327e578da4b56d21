use signup_form::FormError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("{0}")]
    Command(String),
}
