//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the proposal threshold and the image request timeout.

use gunghap_domain::{CompatibilityScore, DEFAULT_IMAGE_SIZE};
use std::time::Duration;

/// Default time allowed for the image service
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 60;

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Scores at or above this value are a match
    pub proposal_threshold: u8,
    /// Request a proposal image on a match
    pub generate_image: bool,
    /// Image dimensions passed to the service
    pub image_size: String,
    /// Maximum time to wait for the image service before giving up.
    pub image_timeout: Option<Duration>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            proposal_threshold: CompatibilityScore::DEFAULT_PROPOSAL_THRESHOLD,
            generate_image: true,
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            image_timeout: Some(Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS)),
        }
    }
}

impl BehaviorConfig {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.proposal_threshold = threshold;
        self
    }

    pub fn without_image(mut self) -> Self {
        self.generate_image = false;
        self
    }

    /// Sets the image timeout from an optional number of seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn with_image_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.image_timeout = seconds.map(Duration::from_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.proposal_threshold, 50);
        assert!(config.generate_image);
        assert_eq!(config.image_size, "1024x1024");
        assert_eq!(config.image_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_builders() {
        let config = BehaviorConfig::default()
            .with_threshold(70)
            .without_image()
            .with_image_timeout_seconds(None);
        assert_eq!(config.proposal_threshold, 70);
        assert!(!config.generate_image);
        assert!(config.image_timeout.is_none());
    }
}
