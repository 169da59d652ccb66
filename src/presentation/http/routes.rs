use super::{
    handlers::{health, upload},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use crate::domain::image::entity::MAX_UPLOAD_BYTES;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

// Transport-level ceiling, above the upload limit so that moderately oversize
// files reach the pipeline's own size check and its user-facing message; a
// body that trips this ceiling instead is rewritten to the same message.
const BODY_LIMIT_BYTES: usize = 2 * MAX_UPLOAD_BYTES;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(health::liveness))
        .route("/health", get(health::health_check))
        // Upload pipeline
        .route("/upload", post(upload::process_upload))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
