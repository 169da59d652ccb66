use crate::{
    application::process_upload::dto::{ProcessUploadRequest, UploadResult},
    domain::image::{
        entity::{ProcessedImage, UploadedImage},
        errors::DomainError,
        value_objects::{AltText, WebpFileName},
    },
    infrastructure::{media::traits::ImageTranscoder, vision::traits::LabelDetector},
};
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// Orchestrates the upload-processing pipeline.
///
/// Three stages run sequentially per request: alt-text derivation from label
/// annotations (best-effort, never fails the request), file-name sanitization
/// (pure), and WebP transcoding (failure is fatal to the request). The label
/// detector and transcoder are injected behind capability traits so the
/// pipeline is unit-testable without network or codec dependencies.
pub struct ProcessUploadUseCase {
    labeler: Arc<dyn LabelDetector>,
    transcoder: Arc<dyn ImageTranscoder>,
}

impl ProcessUploadUseCase {
    pub fn new(labeler: Arc<dyn LabelDetector>, transcoder: Arc<dyn ImageTranscoder>) -> Self {
        Self {
            labeler,
            transcoder,
        }
    }

    /// Process one uploaded image end-to-end.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a disallowed MIME type or an oversize
    /// payload, and a transcode error when the bytes cannot be re-encoded.
    /// Label-detection failures never surface here.
    #[instrument(skip(self, request), fields(
        file = %request.original_file_name,
        mime = %request.content_type,
        size = request.data.len()
    ))]
    pub async fn execute(&self, request: ProcessUploadRequest) -> Result<UploadResult, DomainError> {
        let image = UploadedImage::new(
            request.original_file_name,
            request.content_type,
            request.data,
        )?;

        let alt_text = self.derive_alt_text(&image).await;
        let file_name = WebpFileName::from_alt_text(&alt_text.value);

        let processed = self.transcoder.transcode(&image.data).await.map_err(|err| {
            error!("image transcoding failed: {err:#}");
            DomainError::Transcode(err.to_string())
        })?;
        let processed = ProcessedImage::new(processed);

        Ok(UploadResult {
            message: "File processed successfully!".to_string(),
            original_file_name: image.original_file_name.clone(),
            new_file_name: file_name.value,
            file_size: processed.size(),
            mime_type: ProcessedImage::OUTPUT_MIME.to_string(),
            alt_text: alt_text.value,
            download_url: processed.to_data_uri(),
        })
    }

    /// Best-effort alt-text derivation; always returns a usable string.
    ///
    /// Label-detection failures are logged and swallowed here: alt-text
    /// quality is not critical-path, the transcoded image is.
    async fn derive_alt_text(&self, image: &UploadedImage) -> AltText {
        let fallback_name = image.fallback_name();
        match self.labeler.detect_labels(&image.data).await {
            Ok(labels) => AltText::from_labels(labels, &fallback_name),
            Err(err) => {
                warn!("label detection failed, using fallback alt text: {err:#}");
                AltText::fallback(&fallback_name)
            }
        }
    }
}
