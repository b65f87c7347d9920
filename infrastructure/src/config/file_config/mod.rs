//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod image;
mod output;
mod providers;
mod scoring;

pub use image::FileImageConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use scoring::FileScoringConfig;

use gunghap_application::BehaviorConfig;
use gunghap_domain::CompatibilityScore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("proposal_threshold must be between 0 and 99, got {0}")]
    ThresholdOutOfRange(u8),

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("image size cannot be empty")]
    EmptyImageSize,

    #[error("image model name cannot be empty")]
    EmptyImageModel,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Scoring settings
    pub scoring: FileScoringConfig,
    /// Image generation settings
    pub image: FileImageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Provider settings
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.scoring.proposal_threshold > CompatibilityScore::MAX {
            return Err(ConfigValidationError::ThresholdOutOfRange(
                self.scoring.proposal_threshold,
            ));
        }

        // Timeout of 0 seconds would fail every request
        if let Some(0) = self.image.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.image.size.trim().is_empty() {
            return Err(ConfigValidationError::EmptyImageSize);
        }

        if self.providers.openai.image_model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyImageModel);
        }

        Ok(())
    }

    /// Convert to the application's behavior configuration
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig {
            proposal_threshold: self.scoring.proposal_threshold,
            generate_image: self.image.enabled,
            image_size: self.image.size.clone(),
            image_timeout: None,
        }
        .with_image_timeout_seconds(self.image.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gunghap_domain::OutputFormat;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[scoring]
proposal_threshold = 70

[image]
enabled = false
size = "512x512"
timeout_seconds = 30

[output]
format = "json"
color = false
trace = true

[providers.openai]
api_key_env = "MY_OPENAI_KEY"
base_url = "http://localhost:8080"
image_model = "dall-e-2"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scoring.proposal_threshold, 70);
        assert!(!config.image.enabled);
        assert_eq!(config.image.size, "512x512");
        assert_eq!(config.image.timeout_seconds, Some(30));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.output.trace);
        assert_eq!(config.providers.openai.api_key_env, "MY_OPENAI_KEY");
        assert_eq!(config.providers.openai.base_url, "http://localhost:8080");
        assert_eq!(config.providers.openai.image_model, "dall-e-2");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[scoring]
proposal_threshold = 40
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scoring.proposal_threshold, 40);
        // Defaults should apply
        assert!(config.image.enabled);
        assert_eq!(config.image.size, "1024x1024");
        assert_eq!(config.image.timeout_seconds, Some(60));
        assert!(config.output.color);
        assert_eq!(config.providers.openai.image_model, "dall-e-3");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.scoring.proposal_threshold, 50);
        assert!(config.image.enabled);
        assert!(config.output.format.is_none());
        assert!(!config.output.trace);
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");
        assert!(config.providers.openai.api_key.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_threshold() {
        let config: FileConfig = toml::from_str("[scoring]\nproposal_threshold = 100\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ThresholdOutOfRange(100))
        );
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[image]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_strings() {
        let config: FileConfig = toml::from_str("[image]\nsize = \"\"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyImageSize));

        let config: FileConfig =
            toml::from_str("[providers.openai]\nimage_model = \" \"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyImageModel));
    }

    #[test]
    fn test_to_behavior_config() {
        let config: FileConfig = toml::from_str(
            r#"
[scoring]
proposal_threshold = 60

[image]
enabled = false
timeout_seconds = 15
"#,
        )
        .unwrap();

        let behavior = config.to_behavior_config();
        assert_eq!(behavior.proposal_threshold, 60);
        assert!(!behavior.generate_image);
        assert_eq!(behavior.image_size, "1024x1024");
        assert_eq!(behavior.image_timeout, Some(Duration::from_secs(15)));
    }
}
