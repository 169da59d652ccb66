use crate::{
    application::process_upload::dto::{ProcessUploadRequest, UploadResult},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State},
};

pub async fn process_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResult>, AppError> {
    tracing::info!("received a new upload request");

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }
        let original_file_name = field.file_name().unwrap_or("image").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((original_file_name, content_type, data));
    }

    let (original_file_name, content_type, data) = upload.ok_or(AppError::UnsupportedUpload)?;
    tracing::info!(
        file = %original_file_name,
        size = data.len(),
        "processing uploaded image"
    );

    let result = state
        .pipeline
        .execute(ProcessUploadRequest {
            original_file_name,
            content_type,
            data,
        })
        .await?;

    Ok(Json(result))
}
