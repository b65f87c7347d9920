//! Application layer for gunghap
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, DEFAULT_IMAGE_TIMEOUT_SECS};
pub use ports::{
    image_generator::{ImageGenerationError, ImageGenerator},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::match_names::{MatchNamesError, MatchNamesInput, MatchNamesUseCase};
