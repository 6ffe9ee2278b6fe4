//! Landing page, stored uploads, health and docs routes.
//!
//! Run with: `cargo test -p verity-api --test routes_test`

mod helpers;

use helpers::fixtures;
use helpers::{setup_test_app, setup_test_app_with};

#[tokio::test]
async fn test_index_serves_landing_page() {
    let app = setup_test_app().await;

    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), 200);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert_eq!(response.text(), fixtures::INDEX_HTML);
}

#[tokio::test]
async fn test_index_missing_returns_404() {
    let app = setup_test_app().await;
    std::fs::remove_file(app.static_dir.join("index.html")).unwrap();

    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_stored_upload_can_be_retrieved() {
    let app = setup_test_app().await;
    let png = fixtures::create_test_png(64, 64);

    let upload: serde_json::Value = app.upload("photo.PNG", "image/png", png.clone()).await.json();
    let key = format!("{}.png", upload["file_id"].as_str().unwrap());

    let response = app.client().get(&format!("/uploads/{}", key)).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.as_bytes().as_ref(), png.as_slice());
}

#[tokio::test]
async fn test_unknown_upload_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/uploads/00000000-0000-0000-0000-000000000000.png")
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_traversal_key_is_rejected() {
    let app = setup_test_app().await;

    let response = app.client().get("/uploads/..%2Findex.html").await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_health_and_liveness() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
    assert_eq!(body["static"], "healthy");

    let response = app.client().get("/live").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_health_reports_unavailable_storage() {
    let app = setup_test_app().await;
    std::fs::remove_dir_all(&app.upload_dir).unwrap();

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/analyze"].is_object());
}

#[tokio::test]
async fn test_response_headers() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/live")
        .add_header("X-Request-ID", "test-request-42")
        .await;

    assert_eq!(response.header("x-request-id"), "test-request-42");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");

    let response = app.client().get("/live").await;
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_error_details_follow_configured_environment() {
    let app = setup_test_app().await;
    let response = app
        .upload("photo.png", "image/png", fixtures::create_garbage())
        .await;
    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_type"], "UnreadableImage");
    assert!(body["details"].is_string());

    let app = setup_test_app_with(|config| {
        config.environment = "production".to_string();
        config.cors_origins = vec!["https://verity.example".to_string()];
    })
    .await;
    let response = app
        .upload("photo.png", "image/png", fixtures::create_garbage())
        .await;
    assert_eq!(response.status_code(), 422);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "UNREADABLE_IMAGE");
    assert!(body.get("details").is_none());
    assert!(body.get("error_type").is_none());
}
