//! CLI Argument Structures
//!
//! Command-line arguments for the `harmonizer` binary, parsed with clap derive.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Harmonizer - intent vs. execution analysis for Python code
#[derive(Parser)]
#[command(
    name = "harmonizer",
    version = VERSION,
    about = "Flag functions whose name says one thing while the body does another",
    long_about = "Harmonizer projects each function's name and documentation (intent) and its \
body (execution) onto the Love, Justice, Power and Wisdom axes, then reports how far apart \
the two land.

Common Usage:

  # Analyze a project
  harmonizer analyze ./src

  # Machine-readable output with a stricter threshold
  harmonizer analyze --format json --threshold 0.4 ./src

  # Start from the default configuration
  harmonizer print-default-config > harmonizer.yml

Exit codes: 0 clean, 1 review, 2 attention, 3 critical, 4 error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze Python files for intent/execution disharmony
    Analyze(Box<AnalyzeArgs>),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Validate a configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Distance at or above which a function is reported
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of name suggestions per flagged function
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Skip name suggestions
    #[arg(long)]
    pub no_suggest: bool,

    /// List harmonious functions too (text output)
    #[arg(long)]
    pub show_all: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable report
    Text,
    /// `{ "units": [...], "summary": {...} }` on stdout
    Json,
}
