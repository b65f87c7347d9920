//! CLI entrypoint for gunghap
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use gunghap_application::{MatchNamesError, MatchNamesInput, MatchNamesUseCase};
use gunghap_domain::OutputFormat;
use gunghap_infrastructure::{ConfigLoader, OpenAiImageGenerator};
use gunghap_presentation::{Cli, ConsoleFormatter, MatchRepl, ProgressReporter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting gunghap");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let show_trace = cli.trace || config.output.trace;
    let show_progress = !cli.quiet && format == OutputFormat::Text;

    // === Dependency Injection ===
    let mut behavior = config.to_behavior_config();
    if let Some(threshold) = cli.threshold {
        behavior = behavior.with_threshold(threshold);
    }
    if cli.no_image {
        behavior = behavior.without_image();
    }

    let generate_image = behavior.generate_image;
    let mut use_case = MatchNamesUseCase::new(behavior);

    if generate_image {
        match OpenAiImageGenerator::from_config(&config.providers.openai) {
            Ok(generator) => {
                use_case = use_case.with_image_generator(Arc::new(generator));
            }
            Err(e) => warn!("Proposal images disabled: {}", e),
        }
    }

    let formatter = ConsoleFormatter::new().with_trace(show_trace);

    // Interactive mode
    if cli.interactive {
        MatchRepl::new(use_case, formatter)
            .with_format(format)
            .with_progress(show_progress)
            .run()
            .await?;
        return Ok(());
    }

    // One-shot mode - both names are required
    let (name, partner) = match (cli.name, cli.partner) {
        (Some(name), Some(partner)) => (name, partner),
        _ => bail!("Both names are required. Use --interactive to be prompted."),
    };

    let input = MatchNamesInput::new(name, partner);

    let result = if show_progress {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute(input).await
    };

    let result = match result {
        Ok(result) => result,
        Err(MatchNamesError::InvalidName(e)) => {
            bail!("{}", ConsoleFormatter::validation_message(&e))
        }
    };

    let output = match format {
        OutputFormat::Text => formatter.format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
