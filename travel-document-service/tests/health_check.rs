mod common;

use common::TestApp;
use travel_document_service::services::init_metrics;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "travel-document-service");

    app.cleanup().await;
}

#[tokio::test]
async fn api_health_reports_success_with_timestamp() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/health").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));

    app.cleanup().await;
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "trace-me-123")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-me-123")
    );

    app.cleanup().await;
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    init_metrics().expect("recorder should install");
    let app = TestApp::spawn().await;

    // Record at least one generation
    app.post_json("/api/generate/qr-code", &serde_json::json!({})).await;

    let response = app.get("/metrics").await;
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.expect("Failed to get response body");
    assert!(
        body.contains("documents_generated_total"),
        "Unexpected metrics output: {}",
        body
    );
    assert!(body.contains("http_requests_total"), "{}", body);

    app.cleanup().await;
}
