//! Configuration file loading for gunghap
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GUNGHAP_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./gunghap.toml` or `./.gunghap.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/gunghap/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileImageConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, FileScoringConfig,
};
pub use loader::ConfigLoader;
