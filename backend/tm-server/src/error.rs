use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures. Anything after the server is listening is reported
/// per request instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tm_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] tm_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
