use super::helpers::{
    FailingLabelDetector, assert_status, expect_status, multipart_image_body, read_json, send,
    spawn_app, spawn_app_with, tiny_png_bytes, upload_request,
};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn upload_rejects_request_without_image_part() {
    let app = spawn_app();

    let boundary = "----optimizer-boundary-no-image";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nno image here\r\n--{b}--\r\n",
        b = boundary
    );

    let res = send(&app, upload_request(boundary, body.into_bytes())).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = read_json(res).await;
    assert_eq!(
        payload["error"],
        "No file uploaded or file type is not supported."
    );
}

#[tokio::test]
async fn upload_rejects_disallowed_file_type() {
    let app = spawn_app();

    let (boundary, body) = multipart_image_body("notes.txt", "text/plain", b"plain text");
    let res = send(&app, upload_request(&boundary, body)).await;

    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = read_json(res).await;
    assert_eq!(
        payload["error"],
        "No file uploaded or file type is not supported."
    );
}

#[tokio::test]
async fn upload_rejects_oversize_image_with_limit_message() {
    let app = spawn_app();

    let oversize = vec![0u8; 6 * 1024 * 1024];
    let (boundary, body) = multipart_image_body("big.jpg", "image/jpeg", &oversize);
    let res = send(&app, upload_request(&boundary, body)).await;

    assert_status(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let payload: Value = read_json(res).await;
    assert_eq!(
        payload["error"],
        "The uploaded file is too large. Maximum allowed size is 5MB."
    );
}

#[tokio::test]
async fn upload_derives_alt_text_and_file_name_from_ranked_labels() {
    let app = spawn_app();

    let (boundary, body) = multipart_image_body("photo.png", "image/png", &tiny_png_bytes());
    let res = expect_status(
        send(&app, upload_request(&boundary, body)).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;

    assert_eq!(payload["message"], "File processed successfully!");
    assert_eq!(payload["originalFileName"], "photo.png");
    assert_eq!(payload["altText"], "cat, animal, pet image");
    assert_eq!(payload["newFileName"], "cat-animal-pet-image.webp");
    assert_eq!(payload["mimeType"], "image/webp");

    let file_size = payload["fileSize"].as_u64().expect("fileSize must be an integer");
    assert!(file_size > 0, "transcoded image must not be empty");

    let download_url = payload["downloadUrl"]
        .as_str()
        .expect("downloadUrl must be a string");
    assert!(
        download_url.starts_with("data:image/webp;base64,"),
        "unexpected data URI prefix: {}",
        &download_url[..download_url.len().min(40)]
    );
}

#[tokio::test]
async fn upload_succeeds_with_fallback_alt_text_when_labeling_fails() {
    let app = spawn_app_with(Arc::new(FailingLabelDetector));

    let (boundary, body) =
        multipart_image_body("holiday-shot.png", "image/png", &tiny_png_bytes());
    let res = expect_status(
        send(&app, upload_request(&boundary, body)).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;

    assert_eq!(payload["altText"], "Optimized image for holiday-shot");
    assert_eq!(
        payload["newFileName"],
        "optimized-image-for-holiday-shot.webp"
    );
    assert_eq!(payload["mimeType"], "image/webp");
}

#[tokio::test]
async fn upload_rejects_undecodable_image_bytes() {
    let app = spawn_app();

    let (boundary, body) =
        multipart_image_body("broken.png", "image/png", b"these are not image bytes");
    let res = send(&app, upload_request(&boundary, body)).await;

    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = read_json(res).await;
    assert_eq!(payload["error"], "Failed to process the uploaded image.");
}
