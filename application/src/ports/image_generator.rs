//! Image generator port
//!
//! Defines the interface for the external image generation service.

use async_trait::async_trait;
use gunghap_domain::{ImageReference, ImageRequest};
use thiserror::Error;

/// Errors that can occur while generating an image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageGenerationError {
    #[error("API key not configured (set {0})")]
    MissingApiKey(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Generator for proposal images
///
/// This port defines how the application layer talks to an image service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a single image for the request
    async fn generate(&self, request: &ImageRequest)
    -> Result<ImageReference, ImageGenerationError>;
}
