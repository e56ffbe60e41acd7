//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use reelsmith_api::routes;

/// Build the full app router. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::agent::router())
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, &serde_json::to_vec(body).unwrap()).await
}

/// Send a POST request with arbitrary bytes and return the response.
pub async fn post_raw(app: Router, uri: &str, body: &[u8]) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_vec()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Wrap an action-specific payload in the wire envelope.
pub fn envelope(action: &str, payload: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "action": action, "payload": payload })
}
