//! Infrastructure layer for gunghap
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileImageConfig, FileOpenAiConfig,
    FileOutputConfig, FileProvidersConfig, FileScoringConfig,
};
pub use openai::OpenAiImageGenerator;
