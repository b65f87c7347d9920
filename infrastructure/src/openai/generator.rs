//! OpenAI image generator - implements ImageGenerator from the application layer

use super::protocol::{ImagesRequest, error_from_response, parse_images_response};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use gunghap_application::{ImageGenerationError, ImageGenerator};
use gunghap_domain::{ImageReference, ImageRequest};
use tracing::{debug, info};

/// Path of the image generation endpoint, relative to the base URL
const GENERATIONS_PATH: &str = "/v1/images/generations";

/// Image generator backed by the OpenAI Images API
pub struct OpenAiImageGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiImageGenerator {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a generator from the `[providers.openai]` section.
    ///
    /// Fails with [`ImageGenerationError::MissingApiKey`] when neither the
    /// config nor the environment provides a key.
    pub fn from_config(config: &FileOpenAiConfig) -> Result<Self, ImageGenerationError> {
        let api_key = config
            .api_key_from_env()
            .ok_or_else(|| ImageGenerationError::MissingApiKey(config.api_key_env.clone()))?;

        info!("Using OpenAI image model {}", config.image_model);
        Ok(Self::new(api_key, &config.base_url, &config.image_model))
    }

    /// Full URL of the generations endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATIONS_PATH)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(
        &self,
        request: &ImageRequest,
    ) -> Result<ImageReference, ImageGenerationError> {
        let body = ImagesRequest {
            model: &self.model,
            prompt: &request.prompt,
            n: 1,
            size: &request.size,
        };

        let endpoint = self.endpoint();
        debug!("POST {} (model: {}, size: {})", endpoint, self.model, request.size);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageGenerationError::Connection(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ImageGenerationError::Connection(e.to_string()))?;

        debug!("Image service responded {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &text));
        }

        parse_images_response(&text)
    }
}
