//! Request extraction failures.
//!
//! A body or path that cannot be decoded is answered with the same failed
//! envelope as a business-rule failure.

use crate::ProjectResponse;

use std::panic::Location;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {message} {location}")]
    InvalidBody {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid path parameters: {message} {location}")]
    InvalidPath {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidBody { message, .. } | Self::InvalidPath { message, .. } => message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{}", self);
        ProjectResponse::failure(self.message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
