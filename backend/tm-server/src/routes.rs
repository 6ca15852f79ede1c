use crate::{AppState, api::projects::projects, health};

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Projects
        .route("/api/v1/projects/hello-world", get(projects::hello_world))
        .route(
            "/api/v1/projects",
            get(projects::list_projects)
                .post(projects::insert_project)
                .put(projects::update_project),
        )
        .route(
            "/api/v1/projects/page/{page_index}/{page_size}",
            get(projects::list_projects_paged),
        )
        .route(
            "/api/v1/projects/ordered/{ascending}/{page_index}/{page_size}",
            get(projects::list_projects_ordered),
        )
        .route(
            "/api/v1/projects/{id}/status/{status}",
            put(projects::update_project_status),
        )
        .route(
            "/api/v1/projects/{id}/time-spend/{time_used}",
            put(projects::add_time_spend),
        )
        .with_state(state)
        // The UI is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
