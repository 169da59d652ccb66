use bytes::Bytes;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ProcessUploadRequest {
    pub original_file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Response aggregate for a successfully processed upload.
///
/// Constructed once per request, serialized, then discarded; nothing is cached
/// or stored server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub message: String,
    pub original_file_name: String,
    pub new_file_name: String,
    pub file_size: usize,
    pub mime_type: String,
    pub alt_text: String,
    pub download_url: String,
}
