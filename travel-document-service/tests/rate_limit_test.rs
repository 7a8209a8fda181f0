mod common;

use common::{test_config, TestApp};
use travel_document_service::config::ImageDelivery;

#[tokio::test]
async fn requests_over_the_per_ip_quota_get_429() {
    let mut config = test_config(ImageDelivery::Inline);
    config.limits.rate_limit_per_minute = 3;
    let app = TestApp::spawn_with(config).await;

    let mut limited = None;
    for _ in 0..6 {
        let response = app.get("/api/airports").await;
        if response.status() == 429 {
            limited = Some(response);
            break;
        }
    }

    let response = limited.expect("quota should be exhausted within six requests");
    assert!(response.headers().contains_key("retry-after"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    app.cleanup().await;
}

#[tokio::test]
async fn forwarded_clients_are_limited_separately() {
    let mut config = test_config(ImageDelivery::Inline);
    config.limits.rate_limit_per_minute = 1;
    let app = TestApp::spawn_with(config).await;

    for ip in ["203.0.113.7", "203.0.113.8"] {
        let response = app
            .client
            .get(format!("{}/api/airports", app.address))
            .header("x-forwarded-for", ip)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 200, "first request from {ip}");
    }

    app.cleanup().await;
}
