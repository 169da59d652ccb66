use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Plaintext liveness acknowledgment for the root route.
pub async fn liveness() -> &'static str {
    "Image Optimizer Backend is running!"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    };
    (StatusCode::OK, Json(response))
}
