//! Vision backend trait and the OpenAI-compatible implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use photometa_core::{Error, Result};

use crate::types::*;

/// Default OpenAI API endpoint.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default vision model.
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o-mini";

/// Hard wall-clock budget for one analysis call, in seconds. The in-flight
/// request is cancelled when it expires; there is no retry.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bound on reply length.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Low randomness for more factual replies.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Backend for structured photo analysis using vision LLMs.
#[async_trait]
pub trait VisionBackend: Send + Sync {
    /// Run the analysis prompt against an image and return the model's raw
    /// reply content. `image` is bare base64 or a full data URL.
    async fn analyze_image(&self, image: &str, prompt: &str) -> Result<String>;

    /// Check if the vision backend is available.
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Configuration for the OpenAI-compatible vision backend.
#[derive(Debug, Clone)]
pub struct OpenAIVisionConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication (optional for local endpoints).
    pub api_key: Option<String>,
    /// Vision-capable model to dispatch to.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Bound on reply length.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for OpenAIVisionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_URL.to_string(),
            api_key: None,
            model: DEFAULT_VISION_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// OpenAI-compatible vision backend.
pub struct OpenAIVisionBackend {
    client: Client,
    config: OpenAIVisionConfig,
}

impl OpenAIVisionBackend {
    /// Create a new vision backend with the given configuration.
    pub fn new(config: OpenAIVisionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing vision backend: url={}, model={}",
            config.base_url, config.model
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(OpenAIVisionConfig::default())
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        let config = OpenAIVisionConfig {
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("OPENAI_VISION_MODEL")
                .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string()),
            timeout_seconds: std::env::var("OPENAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        };

        Self::new(config)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAIVisionConfig {
        &self.config
    }

    /// Build a request with authentication if configured.
    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req.header("Content-Type", "application/json")
    }

    /// Build a GET request with authentication.
    fn build_get_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.get(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req
    }

    /// Address the image as a data URL, defaulting the media type to JPEG
    /// when the caller supplied bare base64.
    fn to_data_url(image: &str) -> String {
        if image.starts_with("data:image") {
            image.to_string()
        } else {
            format!("data:image/jpeg;base64,{}", image)
        }
    }
}

#[async_trait]
impl VisionBackend for OpenAIVisionBackend {
    async fn analyze_image(&self, image: &str, prompt: &str) -> Result<String> {
        debug!(
            "Dispatching analysis to model {}, image payload length: {}",
            self.config.model,
            image.len()
        );

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(vec![
                ContentPart::text(prompt),
                ContentPart::image_url(Self::to_data_url(image)),
            ])],
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
            response_format: Some(ResponseFormat::json_object()),
            stream: false,
        };

        let response = self
            .build_request("/chat/completions")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout("Request timed out.".to_string())
                } else {
                    Error::Inference(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body: OpenAIErrorResponse = response.json().await.unwrap_or(OpenAIErrorResponse {
                error: OpenAIError {
                    message: "Unknown error".to_string(),
                    error_type: "unknown".to_string(),
                    code: None,
                },
            });
            return Err(Error::Inference(format!(
                "Vision API returned {}: {}",
                status, body.error.message
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse vision response: {}", e)))?;

        let content = result
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        debug!("Analysis complete, reply length: {}", content.len());
        Ok(content)
    }

    async fn health_check(&self) -> Result<bool> {
        let response = self
            .build_get_request("/models")
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) => {
                warn!("Vision health check error: {}", e);
                Ok(false)
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
