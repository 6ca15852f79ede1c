use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_invalid_body_returns_400_envelope() {
    let error = ApiError::InvalidBody {
        message: "expected value at line 1 column 1".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["isSuccess"], false);
    assert_eq!(
        json["error"]["message"],
        "expected value at line 1 column 1"
    );
}

#[tokio::test]
async fn test_invalid_path_returns_400_envelope() {
    let error = ApiError::InvalidPath {
        message: "Cannot parse `abc` to a `i64`".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("abc")
    );
}
