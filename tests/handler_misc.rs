mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::routes::{StaticFiles, app_router};
use std::sync::Arc;
use tower::ServiceExt;

/// Sends one request through the production router, path normalization included.
async fn send_normalized(request: Request<Body>) -> (StatusCode, Value) {
    let (state, _repository) = common::create_test_state();
    let response = app_router(state, &StaticFiles::default())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_hello() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "greeting": "hello API" }));
}

#[tokio::test]
async fn test_health_ok() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let state = common::create_test_state_with(Arc::new(common::FailingRepository));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["database"]["message"], "connection refused");
}

#[tokio::test]
async fn test_landing_page() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("/api/shorturl"));
    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_public_assets() {
    let (server, _repository) = common::create_test_server();

    server.get("/public/style.css").await.assert_status_ok();
    server
        .get("/public/missing.css")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .get("/api/hello")
        .add_header("Origin", "https://client.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let request = Request::get("/api/hello/").body(Body::empty()).unwrap();
    let (status, body) = send_normalized(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "greeting": "hello API" }));

    let request = Request::post("/api/shorturl/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"url":"https://www.example.com"}"#))
        .unwrap();
    let (status, body) = send_normalized(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_url"], "https://www.example.com");
    assert_eq!(body["short_url"].as_str().unwrap().len(), 8);
}
