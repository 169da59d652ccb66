use crate::domain::image::entity::LabelAnnotation;
use async_trait::async_trait;

/// Capability seam over the external label-detection service.
///
/// Implementations must be safe for concurrent use by in-flight requests; a
/// single instance lives for the whole process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Request ranked label annotations for the given image bytes.
    async fn detect_labels(&self, image_data: &[u8]) -> anyhow::Result<Vec<LabelAnnotation>>;
}
