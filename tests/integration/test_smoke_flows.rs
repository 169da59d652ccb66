use super::helpers::{expect_status, read_json, read_text, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

#[tokio::test]
async fn root_route_acknowledges_liveness() {
    let app = spawn_app();

    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .expect("failed to build request");

    let res = expect_status(send(&app, req).await, StatusCode::OK).await;
    let text = read_text(res).await;
    assert_eq!(text, "Image Optimizer Backend is running!");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = spawn_app();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("failed to build request");

    let res = expect_status(send(&app, req).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["status"], "healthy");
    assert!(payload["version"].is_string());
}

#[tokio::test]
async fn responses_carry_a_request_id_header() {
    let app = spawn_app();

    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .expect("failed to build request");

    let res = send(&app, req).await;
    assert!(
        res.headers().contains_key("x-request-id"),
        "x-request-id header missing"
    );
}
