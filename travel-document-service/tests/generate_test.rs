mod common;

use common::{decode_qr, test_config, TestApp};
use serde_json::json;
use travel_document_service::config::ImageDelivery;

const DEFAULT_BOARDING_PASS: &str = "BOARDING PASS\nPassenger: Rahul Sharma\nFlight: AI 2727\n\
    From: BOM\nTo: DEL\nDate: 2025-09-10\nTime: 13:15\nSeat: 17A\nGate: 07\nPNR: ABC123\n\
    Boarding: 12:45\nClass: Y\nSeq: 001A";

#[tokio::test]
async fn qr_code_for_empty_body_is_default_boarding_pass() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/generate/qr-code", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["documentType"], "boarding_pass");
    assert_eq!(body["data"]["qrData"], DEFAULT_BOARDING_PASS);

    let filename = body["data"]["filename"].as_str().unwrap();
    assert!(filename.starts_with("qr_code_") && filename.ends_with(".png"));
    assert_eq!(
        body["data"]["qrImageUrl"],
        format!("/static/images/{}", filename)
    );

    app.cleanup().await;
}

#[tokio::test]
async fn stored_qr_code_is_served_and_decodes_to_payload() {
    let app = TestApp::spawn().await;

    let body: serde_json::Value = app
        .post_json(
            "/api/generate/qr-code",
            &json!({ "bagNumber": "0000-615742", "pnr": "ABC123" }),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["documentType"], "baggage_tag");

    let url = body["data"]["qrImageUrl"].as_str().unwrap();
    let image = app.get(url).await;
    assert_eq!(image.status(), 200);
    assert_eq!(
        image.headers().get("cross-origin-resource-policy").unwrap(),
        "cross-origin"
    );

    let bytes = image.bytes().await.unwrap();
    assert_eq!(
        decode_qr(&bytes),
        "BAGGAGE TAG\nPassenger: Priya Patel\nFlight: AI0121\nFrom: BOM\nTo: DEL\n\
         PNR: ABC123\nTag: 0000-615742"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn barcode_carries_ticket_number_for_e_ticket() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/generate/barcode",
            &json!({ "ticketNumber": "0987654321098", "bagNumber": "0000-1" }),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["documentType"], "e_ticket");
    assert_eq!(body["data"]["barcodeData"], "0987654321098");
    assert!(body["data"]["filename"]
        .as_str()
        .unwrap()
        .starts_with("barcode_"));

    app.cleanup().await;
}

#[tokio::test]
async fn barcode_with_non_ascii_pnr_is_unprocessable() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/api/generate/barcode", &json!({ "pnr": "ABC\u{e9}12" }))
        .await;
    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("position 3"));

    app.cleanup().await;
}

#[tokio::test]
async fn document_returns_both_images() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/generate/document",
            &json!({ "firstName": "Meera", "seat": 3, "pnr": "XYZ789" }),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let data = &body["data"];
    assert_eq!(data["documentType"], "boarding_pass");
    assert_eq!(data["barcodeText"], "XYZ789");
    assert!(data["qrText"].as_str().unwrap().contains("Seat: 3"));
    assert!(data["qrImageUrl"].as_str().unwrap().starts_with("/static/images/qr_code_"));
    assert!(data["barcodeImageUrl"]
        .as_str()
        .unwrap()
        .starts_with("/static/images/barcode_"));

    app.cleanup().await;
}

#[tokio::test]
async fn inline_delivery_returns_data_uri_and_writes_nothing() {
    let app = TestApp::spawn_with(test_config(ImageDelivery::Inline)).await;

    let body: serde_json::Value = app
        .post_json("/api/generate/qr-code", &json!({}))
        .await
        .json()
        .await
        .unwrap();

    let url = body["data"]["qrImageUrl"].as_str().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    assert!(!std::path::Path::new(&app.images_dir).exists());

    app.cleanup().await;
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/generate/qr-code", app.address))
        .header("content-type", "application/json")
        .body("{\"pnr\": ")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    app.cleanup().await;
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = TestApp::spawn().await;

    let big = "x".repeat(70_000);
    let response = app
        .post_json("/api/generate/qr-code", &json!({ "notes": big }))
        .await;

    assert_eq!(response.status(), 413);

    app.cleanup().await;
}
