use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing request: {message} {location}")]
    MissingRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing required field {field}: {message} {location}")]
    MissingField {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Client-facing text, without the source location.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingRequest { message, .. } | Self::MissingField { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
