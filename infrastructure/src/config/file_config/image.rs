//! Image configuration from TOML (`[image]` section)

use gunghap_application::DEFAULT_IMAGE_TIMEOUT_SECS;
use gunghap_domain::DEFAULT_IMAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Raw image generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Request a proposal image on a match
    pub enabled: bool,
    /// Image dimensions, e.g. "1024x1024"
    pub size: String,
    /// Timeout in seconds for the image service
    pub timeout_seconds: Option<u64>,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_IMAGE_SIZE.to_string(),
            timeout_seconds: Some(DEFAULT_IMAGE_TIMEOUT_SECS),
        }
    }
}
