#![allow(dead_code)]

//! Test infrastructure for tm-server API tests

use tm_core::{NewProject, Project};
use tm_db::{ProjectRepository, ProjectStore, connect_in_memory};
use tm_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// AppState over a migrated in-memory SQLite database
pub async fn create_test_app_state() -> AppState {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");
    AppState::new(Arc::new(ProjectRepository::new(pool)))
}

/// Ids 1..=4, due in 30, 60, 90 and 20 days
pub async fn seed_four_projects(store: &dyn ProjectStore) -> Vec<Project> {
    let now = Utc::now();
    let mut seeded = Vec::new();
    for (name, days) in [("Alpha", 30), ("Beta", 60), ("Gamma", 90), ("Delta", 20)] {
        let project = NewProject::new(name.to_string(), Some(now + Duration::days(days)));
        seeded.push(
            store
                .insert(project)
                .await
                .expect("Failed to create test project"),
        );
    }
    seeded
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["projects"]
        .as_array()
        .map(|projects| projects.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default()
}
