//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`,
//! so the service can be configured the same way in local, containerized and cloud
//! deployments. A `.env` file is honored in development via `dotenvy`.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `VISION_API_KEY`: API key used to authenticate against the label-detection service.
//!   Startup aborts if the labeling client cannot be constructed from it.
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,image_optimizer_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5001)
//! - `VISION_ENDPOINT`: Label-detection REST endpoint
//!   (default: "https://vision.googleapis.com/v1/images:annotate")
//! - `VISION_MAX_RESULTS`: Maximum label annotations requested per image (default: 10)
//! - `WEBP_QUALITY`: Lossy WebP encoder quality, 0-100 scale (default: 80)

use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// API key for the label-detection service
    pub vision_api_key: String,

    /// REST endpoint of the label-detection service
    pub vision_endpoint: String,

    /// Maximum number of label annotations requested per image
    pub vision_max_results: u32,

    /// WebP encoder quality on a 0-100 scale
    pub webp_quality: f32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required environment variable is missing or
    /// a set variable cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 5001)?,
            vision_api_key: env_required("VISION_API_KEY")?,
            vision_endpoint: env_or(
                "VISION_ENDPOINT",
                "https://vision.googleapis.com/v1/images:annotate".to_string(),
            )?,
            vision_max_results: env_or("VISION_MAX_RESULTS", 10)?,
            webp_quality: env_or("WEBP_QUALITY", 80.0)?,
        })
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
