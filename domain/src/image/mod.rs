//! Image generation value objects
//!
//! Image generation itself is an external service; the domain only describes
//! what is asked for and what comes back.

use serde::{Deserialize, Serialize};

/// Default image dimensions
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// A request for one generated image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Natural-language description of the image
    pub prompt: String,
    /// Dimensions, e.g. "1024x1024"
    pub size: String,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }
}

/// Where a generated image can be found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageReference {
    /// Hosted image URL
    Url(String),
    /// Base64-encoded image payload
    Base64(String),
}

/// What happened to the image step of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    /// No image was requested
    Skipped,
    /// The service returned an image
    Generated { image: ImageReference },
    /// The service failed; the message is shown to the user
    Failed { message: String },
}

impl ImageOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, ImageOutcome::Generated { .. })
    }

    /// The generated image, if any
    pub fn image(&self) -> Option<&ImageReference> {
        match self {
            ImageOutcome::Generated { image } => Some(image),
            _ => None,
        }
    }
}
