use tm_core::CoreError;
use tm_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

pub const PROJECT_NOT_FOUND_MESSAGE: &str = "Project don't found on Database.";
pub const TIME_SPEND_BELOW_MINIMUM_MESSAGE: &str =
    "The time spend on project is less than 30. Need to be more than 30 minutes.";

/// Why a business operation did not complete. Every variant ends up as a
/// failed envelope; none of them is fatal to the server.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Project {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Time spend {time_used} is below the minimum {location}")]
    TimeSpendBelowMinimum {
        time_used: i64,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] DbError),
}

impl LogicError {
    /// Text sent back to the client, without the source location.
    pub fn message(&self) -> String {
        match self {
            Self::Core(e) => e.message().to_string(),
            Self::NotFound { .. } | Self::Store(DbError::NotFound { .. }) => {
                PROJECT_NOT_FOUND_MESSAGE.to_string()
            }
            Self::TimeSpendBelowMinimum { .. } => TIME_SPEND_BELOW_MINIMUM_MESSAGE.to_string(),
            Self::Store(e) => e.message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogicError>;
