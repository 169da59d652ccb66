use super::traits::ImageTranscoder;
use anyhow::Context;
use async_trait::async_trait;

/// Lossy WebP transcoder backed by the `image` decoder and the `webp` encoder.
///
/// Decoding and encoding are CPU-bound, so the work runs on the blocking
/// thread pool and the async caller only awaits the handle.
pub struct WebpTranscoder {
    quality: f32,
}

impl WebpTranscoder {
    pub fn new(quality: f32) -> Self {
        Self { quality }
    }
}

#[async_trait]
impl ImageTranscoder for WebpTranscoder {
    async fn transcode(&self, image_data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let quality = self.quality;
        let data = image_data.to_vec();
        tokio::task::spawn_blocking(move || encode_webp(&data, quality))
            .await
            .map_err(|err| anyhow::anyhow!("transcode task failed: {err}"))?
    }
}

fn encode_webp(image_data: &[u8], quality: f32) -> anyhow::Result<Vec<u8>> {
    let img = image::load_from_memory(image_data)
        .context("invalid or corrupted image data")?;
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    Ok(encoder.encode(quality).to_vec())
}
