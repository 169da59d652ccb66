use super::errors::DomainError;
use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use std::path::Path;

/// Maximum accepted upload size in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Declared MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/bmp",
];

/// An uploaded image as received from the client, before any processing.
///
/// Request-scoped: created when the multipart body is parsed and discarded
/// when the request completes.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub original_file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl UploadedImage {
    /// Validate the declared MIME type and byte size of an upload.
    pub fn new(
        original_file_name: String,
        mime_type: String,
        data: Bytes,
    ) -> Result<Self, DomainError> {
        if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(DomainError::UnsupportedMediaType(mime_type));
        }
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(DomainError::PayloadTooLarge(data.len()));
        }
        Ok(Self {
            original_file_name,
            mime_type,
            data,
        })
    }

    /// Original file name with its extension stripped, used in fallback alt text.
    pub fn fallback_name(&self) -> String {
        Path::new(&self.original_file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.original_file_name.clone())
    }
}

/// A single label annotation returned by the label-detection service.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnnotation {
    pub description: String,
    pub score: f32,
}

/// The re-encoded image produced by the transcoder.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub data: Vec<u8>,
}

impl ProcessedImage {
    /// MIME type of every transcoded image.
    pub const OUTPUT_MIME: &'static str = "image/webp";

    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Self-contained `data:` URI carrying the encoded bytes.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            Self::OUTPUT_MIME,
            general_purpose::STANDARD.encode(&self.data)
        )
    }
}
