use super::traits::LabelDetector;
use crate::domain::image::entity::LabelAnnotation;
use anyhow::Context;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::json;

/// REST client for the Google Cloud Vision `images:annotate` endpoint.
///
/// Holds a single long-lived `reqwest::Client`, which is cheap to clone and
/// safe to share across concurrent requests. No retry or explicit timeout is
/// layered on top of the HTTP client's defaults.
pub struct GoogleVisionClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_results: u32,
}

impl GoogleVisionClient {
    /// Build the client, validating credentials up front.
    ///
    /// # Errors
    ///
    /// Returns an error when the API key is empty or the HTTP client cannot
    /// be constructed; callers are expected to abort startup on failure.
    pub fn new(api_key: String, endpoint: String, max_results: u32) -> anyhow::Result<Self> {
        if api_key.trim().is_empty() {
            anyhow::bail!("label-detection API key must not be empty");
        }
        let http = reqwest::Client::builder()
            .build()
            .context("failed to construct HTTP client for label detection")?;
        Ok(Self {
            http,
            api_key,
            endpoint,
            max_results,
        })
    }
}

#[async_trait]
impl LabelDetector for GoogleVisionClient {
    async fn detect_labels(&self, image_data: &[u8]) -> anyhow::Result<Vec<LabelAnnotation>> {
        let content = general_purpose::STANDARD.encode(image_data);
        let payload = json!({
            "requests": [{
                "image": { "content": content },
                "features": [{
                    "type": "LABEL_DETECTION",
                    "maxResults": self.max_results,
                }],
            }]
        });

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("label detection request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("label detection returned {status}: {body}");
        }

        let annotate: AnnotateResponse = response
            .json()
            .await
            .context("failed to parse label detection response")?;
        let first = annotate.responses.into_iter().next().unwrap_or_default();

        if let Some(error) = first.error {
            anyhow::bail!(
                "label detection rejected the image: {}",
                error.message.unwrap_or_else(|| format!(
                    "code {}",
                    error.code.unwrap_or_default()
                ))
            );
        }

        Ok(first
            .label_annotations
            .into_iter()
            .map(|label| LabelAnnotation {
                description: label.description,
                score: label.score,
            })
            .collect())
    }
}

#[derive(Debug, Default, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    label_annotations: Vec<LabelAnnotationPayload>,
    error: Option<RpcStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelAnnotationPayload {
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f32,
}

#[derive(Debug, Deserialize)]
struct RpcStatus {
    code: Option<i32>,
    message: Option<String>,
}
