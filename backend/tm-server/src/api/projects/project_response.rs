//! The envelope every project operation answers with.

use crate::ProjectDto;
use crate::logic::error::LogicError;

use tm_core::{Page, Project};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

/// `{ isSuccess, projects, error, hasMore? }`
///
/// Either wholly successful or wholly failed: a failed response never
/// carries projects. `hasMore` is only present on paged reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub is_success: bool,
    pub projects: Vec<ProjectDto>,
    pub error: Option<ResponseError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl ProjectResponse {
    pub fn success(projects: Vec<Project>) -> Self {
        let now = Utc::now();
        Self {
            is_success: true,
            projects: projects
                .into_iter()
                .map(|p| ProjectDto::from_project(p, now))
                .collect(),
            error: None,
            has_more: None,
        }
    }

    pub fn paged(page: Page<Project>) -> Self {
        let has_more = page.has_more;
        Self {
            has_more: Some(has_more),
            ..Self::success(page.records)
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            projects: Vec::new(),
            error: Some(ResponseError {
                message: message.into(),
            }),
            has_more: None,
        }
    }

    pub fn paged_failure(message: impl Into<String>) -> Self {
        Self {
            has_more: Some(false),
            ..Self::failure(message)
        }
    }

    pub fn from_error(error: &LogicError) -> Self {
        Self::failure(error.message())
    }

    pub fn status(&self) -> StatusCode {
        if self.is_success {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for ProjectResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
