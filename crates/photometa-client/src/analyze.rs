//! Best-effort AI analysis client.
//!
//! Analysis is enrichment, not a source of truth: a failure here must never
//! block or break the primary metadata-display flow. The client therefore
//! absorbs every failure into the complete all-`"Unknown"` fallback record
//! instead of surfacing it.

use tracing::warn;

use photometa_core::{Error, PhotoAnalysis, Result};

use crate::encode::encode_image_handle;
use crate::handle::ImageHandle;

/// Default base URL of the analysis API.
pub const DEFAULT_ANALYZE_API_URL: &str = "http://localhost:3000";

/// HTTP client for the photo analysis endpoint.
pub struct AnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create from the `ANALYZE_API_URL` environment variable.
    pub fn from_env() -> Self {
        let base_url = std::env::var("ANALYZE_API_URL")
            .unwrap_or_else(|_| DEFAULT_ANALYZE_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request analysis for a base64-encoded image payload.
    ///
    /// Resolves with a complete record in every case: on any network error,
    /// non-2xx response, or malformed payload the diagnostics are logged and
    /// the all-`"Unknown"` fallback stands in.
    pub async fn analyze_photo_context(&self, image_base64: &str) -> PhotoAnalysis {
        match self.request_analysis(image_base64).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "photo analysis failed, returning fallback record");
                PhotoAnalysis::unknown()
            }
        }
    }

    /// Encode a displayable image and request analysis for it.
    ///
    /// Encoding failures propagate; the analysis call itself never fails.
    pub async fn analyze_image(&self, handle: &ImageHandle) -> Result<PhotoAnalysis> {
        let payload = encode_image_handle(handle)?;
        Ok(self.analyze_photo_context(&payload).await)
    }

    async fn request_analysis(&self, image_base64: &str) -> Result<PhotoAnalysis> {
        let url = format!(
            "{}/api/analyze-photo",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "image": image_base64 }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Request(format!(
                "API error: {}",
                response.status().as_u16()
            )));
        }

        Ok(response.json::<PhotoAnalysis>().await?)
    }
}
