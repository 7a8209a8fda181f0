use axum::{response::IntoResponse, Json};
use chrono::Local;
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "travel-document-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn api_health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Travel document service is running",
        "timestamp": Local::now().to_rfc3339()
    }))
}
