use async_trait::async_trait;

/// Capability seam over the image re-encoding library.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageTranscoder: Send + Sync {
    /// Re-encode raw image bytes into the fixed output format.
    ///
    /// # Errors
    ///
    /// Returns an error when the input bytes cannot be decoded as any
    /// supported image format.
    async fn transcode(&self, image_data: &[u8]) -> anyhow::Result<Vec<u8>>;
}
