//! Presentation layer for gunghap
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive prompt.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use interactive::MatchRepl;
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter};
pub use progress::reporter::ProgressReporter;
