use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("upload of {0} bytes exceeds the maximum allowed size")]
    PayloadTooLarge(usize),
    #[error("image transcoding failed: {0}")]
    Transcode(String),
}
