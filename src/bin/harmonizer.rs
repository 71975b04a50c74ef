//! Harmonizer CLI - intent vs. execution analysis for Python code
//!
//! Walks the given paths, scores every function and exits with a code that
//! reflects the worst disharmony found.

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};
use harmonizer_rs::ExitStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; stderr keeps JSON on stdout clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let outcome = match cli.command {
        Commands::Analyze(args) => cli::analyze_command(*args).await,
        Commands::PrintDefaultConfig => cli::print_default_config().await,
        Commands::ValidateConfig(args) => cli::validate_config(args).await,
    };

    let status = outcome.unwrap_or_else(|e| {
        error!("{:#}", e);
        ExitStatus::Error
    });

    std::process::exit(status.code());
}
