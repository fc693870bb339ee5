mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::api::handlers::redirect_handler;
use shorturl::domain::entities::NewUrlRecord;
use shorturl::domain::repositories::UrlRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_round_trip_redirects_to_submitted_url() {
    let (server, _repository) = common::create_test_server();

    let created = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://www.example.com" }))
        .await
        .json::<Value>();
    let short_url = created["short_url"].as_str().unwrap();

    let response = server.get(&format!("/api/shorturl/{}", short_url)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.example.com");
}

#[tokio::test]
async fn test_redirect_preserves_path_and_query() {
    let (state, repository) = common::create_test_state();
    repository
        .insert(NewUrlRecord {
            original_url: "https://example.com/a/b?c=d&e=f".to_string(),
            short_url: "pathqury".to_string(),
        })
        .await
        .unwrap();

    let app = Router::new()
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/shorturl/pathqury").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a/b?c=d&e=f");
}

#[tokio::test]
async fn test_unknown_short_url_returns_404() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/api/shorturl/doesnotexist").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No short URL found for the given input" })
    );
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let (state, repository) = common::create_test_state();
    repository
        .insert(NewUrlRecord {
            original_url: "https://example.com".to_string(),
            short_url: "AbCdEfGh".to_string(),
        })
        .await
        .unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    assert_eq!(server.get("/api/shorturl/AbCdEfGh").await.status_code(), 302);
    server
        .get("/api/shorturl/abcdefgh")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    let state = common::create_test_state_with(Arc::new(common::FailingRepository));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/shorturl/anything").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"], "internal server error");
}
