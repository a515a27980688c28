mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use urlshortener::api::handlers::redirect_handler;

#[tokio::test]
async fn test_redirect_success() {
    let repo = Arc::new(common::InMemoryRepository::new());
    repo.insert_row("https://example.com/target", "c0ffee42");

    let state = common::create_test_state(repo);
    let app = Router::new()
        .route("/{short}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/c0ffee42").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_location_is_the_stored_string() {
    let repo = Arc::new(common::InMemoryRepository::new());
    // Whatever was shortened is echoed back, scheme or not.
    repo.insert_row("example.com", "5ababd60");

    let state = common::create_test_state(repo);
    let app = Router::new()
        .route("/{short}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/5ababd60").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "example.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let state = common::create_test_state(repo);
    let app = Router::new()
        .route("/{short}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/deadbeef").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn test_redirect_database_failure_returns_500() {
    let state = common::create_test_state(Arc::new(common::FailingRepository));
    let app = Router::new()
        .route("/{short}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/c984d06a").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "MySQL server has gone away");
}
