//! Error Response Tests
//!
//! Exercises the `AppError` to HTTP mapping end to end through a router,
//! asserting both status codes and the `{ code, message }` JSON body shape.

use axum::{body::Body, http::Request, routing::get, Router};
use tower::ServiceExt;

use banking_server::shared::error::AppError;

fn error_router() -> Router {
    Router::new()
        .route(
            "/not-found",
            get(|| async { Err::<(), _>(AppError::NotFound("client with id 7 does not exist".into())) }),
        )
        .route(
            "/bad-request",
            get(|| async { Err::<(), _>(AppError::BadRequest("client is under legal age".into())) }),
        )
        .route(
            "/validation",
            get(|| async { Err::<(), _>(AppError::Validation("email: invalid format".into())) }),
        )
        .route(
            "/internal",
            get(|| async { Err::<(), _>(AppError::Internal("connection refused".into())) }),
        )
}

async fn get_json(uri: &str) -> (u16, serde_json::Value) {
    let response = error_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_returns_404_with_code() {
    let (status, body) = get_json("/not-found").await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 10001);
    assert_eq!(body["message"], "client with id 7 does not exist");
}

#[tokio::test]
async fn bad_request_returns_400_with_code() {
    let (status, body) = get_json("/bad-request").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 10002);
    assert_eq!(body["message"], "client is under legal age");
}

#[tokio::test]
async fn validation_returns_400_with_code() {
    let (status, body) = get_json("/validation").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 10003);
    assert_eq!(body["message"], "email: invalid format");
}

#[tokio::test]
async fn internal_returns_500_without_leaking_detail() {
    let (status, body) = get_json("/internal").await;
    assert_eq!(status, 500);
    assert_eq!(body["code"], 10000);
    assert_eq!(body["message"], "Internal server error");
}
