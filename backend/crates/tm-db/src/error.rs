use tm_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Project {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Project id {id} already exists {location}")]
    DuplicateId { id: i64, location: ErrorLocation },

    #[error("Corrupt project row: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Text suitable for a client-facing error envelope.
    pub fn message(&self) -> String {
        match self {
            Self::Sqlx { source, .. } => source.to_string(),
            Self::Migration { message, .. }
            | Self::Initialization { message, .. }
            | Self::Corrupt { message, .. } => message.clone(),
            Self::NotFound { id, .. } => format!("Project {} not found", id),
            Self::DuplicateId { id, .. } => format!("Project id {} already exists", id),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
