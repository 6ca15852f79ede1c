use crate::ProjectResponse;

use tm_core::{Page, Project};

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;
use googletest::prelude::*;

fn project(id: i64) -> Project {
    Project {
        id,
        name: format!("Project {}", id),
        developer_id: 1,
        deadline: None,
        time_spend: 0,
        project_is_completed: false,
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_success_when_into_response_then_200_without_has_more() {
    let response = ProjectResponse::success(vec![project(1)]).into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], true);
    assert_eq!(json["projects"][0]["id"], 1);
    assert!(json["error"].is_null());
    assert!(json.get("hasMore").is_none());
}

#[tokio::test]
async fn given_page_when_into_response_then_has_more_present() {
    let page = Page {
        records: vec![project(1), project(2)],
        has_more: true,
    };

    let response = ProjectResponse::paged(page).into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["hasMore"], true);
    assert_eq!(json["projects"].as_array().map(|a| a.len()), Some(2));
}

#[tokio::test]
async fn given_failure_when_into_response_then_400_with_message_and_no_projects() {
    let response = ProjectResponse::failure("Project don't found on Database.").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["error"]["message"], "Project don't found on Database.");
    assert_eq!(json["projects"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn given_paged_failure_then_has_more_false() {
    let response = ProjectResponse::paged_failure("boom");

    assert_that!(response.is_success, eq(false));
    assert_that!(response.has_more, some(eq(false)));
    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
}
