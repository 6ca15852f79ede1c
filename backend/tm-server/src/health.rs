use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - status, version and store backend
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = state.store();
    let (status, store_status) = match store.count().await {
        Ok(_) => ("healthy", "operational"),
        Err(e) => {
            warn!("Health check: store unavailable: {}", e);
            ("degraded", "unavailable")
        }
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": {
                "backend": store.backend(),
                "status": store_status,
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - the process answers
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - the store answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.store().count().await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
