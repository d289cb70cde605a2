#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use changedoc_engine::advisory::Advisory;
use changedoc_engine::RepositoryAcquirer;
use changedoc_server::{router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn app(advisory: impl Advisory + 'static) -> Router {
    router(AppState::new(Arc::new(advisory), RepositoryAcquirer::default()))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_generate(app: Router, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}
