//! Project REST handlers.
//!
//! Thin wrappers: decode the path/body, hand off to `ProjectsLogic`, answer
//! with its envelope.

use crate::{ApiResult, AppState, CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

/// GET /api/v1/projects/hello-world
pub async fn hello_world() -> &'static str {
    "Hello Back!"
}

/// GET /api/v1/projects
pub async fn list_projects(State(state): State<AppState>) -> ProjectResponse {
    state.logic.get_projects().await
}

/// GET /api/v1/projects/page/{page_index}/{page_size}
pub async fn list_projects_paged(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<ProjectResponse> {
    let Path((page_index, page_size)) = path?;
    Ok(state
        .logic
        .get_projects_by_pagination(page_index, page_size, None)
        .await)
}

/// GET /api/v1/projects/ordered/{ascending}/{page_index}/{page_size}
pub async fn list_projects_ordered(
    State(state): State<AppState>,
    path: Result<Path<(bool, i64, i64)>, PathRejection>,
) -> ApiResult<ProjectResponse> {
    let Path((ascending, page_index, page_size)) = path?;
    Ok(state
        .logic
        .get_order_by_deadline_projects(ascending, page_index, page_size)
        .await)
}

/// POST /api/v1/projects
pub async fn insert_project(
    State(state): State<AppState>,
    body: Result<Json<Option<CreateProjectRequest>>, JsonRejection>,
) -> ApiResult<ProjectResponse> {
    let Json(request) = body?;
    Ok(state.logic.insert_project(request).await)
}

/// PUT /api/v1/projects
pub async fn update_project(
    State(state): State<AppState>,
    body: Result<Json<Option<UpdateProjectRequest>>, JsonRejection>,
) -> ApiResult<ProjectResponse> {
    let Json(request) = body?;
    Ok(state.logic.update_project(request).await)
}

/// PUT /api/v1/projects/{id}/status/{status}
pub async fn update_project_status(
    State(state): State<AppState>,
    path: Result<Path<(i64, bool)>, PathRejection>,
) -> ApiResult<ProjectResponse> {
    let Path((id, completed)) = path?;
    Ok(state.logic.update_status_project(id, completed).await)
}

/// PUT /api/v1/projects/{id}/time-spend/{time_used}
pub async fn add_time_spend(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<ProjectResponse> {
    let Path((id, time_used)) = path?;
    Ok(state.logic.update_time_used_on_project(id, time_used).await)
}
