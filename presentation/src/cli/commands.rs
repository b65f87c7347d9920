//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for match results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable result
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for gunghap_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => gunghap_domain::OutputFormat::Text,
            OutputFormat::Json => gunghap_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for gunghap
#[derive(Parser, Debug)]
#[command(name = "gunghap")]
#[command(author, version, about = "Name compatibility (이름 궁합) score for two Korean names")]
#[command(long_about = r#"
gunghap computes the traditional name compatibility score of two Korean names.

Both names are written one after the other, each syllable is replaced by
its stroke count, and neighbouring numbers are added (keeping the last two
digits) until two numbers remain. Their last digits form the score (0-99).

When the score reaches the proposal threshold, a proposal picture is
requested from the image service (OpenAI; set OPENAI_API_KEY).

Configuration files are loaded from (in priority order):
1. GUNGHAP_* environment variables (e.g. GUNGHAP_IMAGE__ENABLED=false)
2. --config <path>     Explicit config file
3. ./gunghap.toml      Project-level config
4. ~/.config/gunghap/config.toml   Global config

Example:
  gunghap 김철수 이영희
  gunghap --trace --no-image 홍길동 이영희
  gunghap -o json 가 나
  gunghap --interactive
"#)]
pub struct Cli {
    /// Your name (Hangul syllables only)
    pub name: Option<String>,

    /// Partner's name (Hangul syllables only)
    pub partner: Option<String>,

    /// Prompt for names interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the folding triangle
    #[arg(long)]
    pub trace: bool,

    /// Do not request a proposal image
    #[arg(long)]
    pub no_image: bool,

    /// Score at or above which the names are a match
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=99))]
    pub threshold: Option<u8>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        let cli = Cli::try_parse_from(["gunghap", "김철수", "이영희"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("김철수"));
        assert_eq!(cli.partner.as_deref(), Some("이영희"));
        assert!(!cli.interactive);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "gunghap",
            "-o",
            "json",
            "--trace",
            "--no-image",
            "--threshold",
            "70",
            "-vv",
            "가",
            "나",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.trace);
        assert!(cli.no_image);
        assert_eq!(cli.threshold, Some(70));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_threshold_range() {
        assert!(Cli::try_parse_from(["gunghap", "--threshold", "100", "가", "나"]).is_err());
    }

    #[test]
    fn test_interactive_needs_no_names() {
        let cli = Cli::try_parse_from(["gunghap", "-i"]).unwrap();
        assert!(cli.interactive);
        assert!(cli.name.is_none());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            gunghap_domain::OutputFormat::from(OutputFormat::Json),
            gunghap_domain::OutputFormat::Json
        );
    }
}
