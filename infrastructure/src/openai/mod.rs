//! OpenAI Images API adapter
//!
//! Implements the [`ImageGenerator`](gunghap_application::ImageGenerator)
//! port over HTTP.

mod generator;
pub mod protocol;

pub use generator::OpenAiImageGenerator;
