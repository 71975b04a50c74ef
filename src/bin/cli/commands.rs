//! Command Execution Logic
//!
//! Analysis, configuration printing and configuration validation. Every
//! command returns the [`ExitStatus`] the process should end with.

use crate::cli::args::*;
use crate::cli::output::*;
use anyhow::{bail, Context};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use harmonizer_rs::lang::python::AdapterStats;
use harmonizer_rs::{ExitStatus, HarmonizerConfig, HarmonyEngine, PythonAdapter};

/// Directory names never descended into
const SKIPPED_DIRS: &[&str] = &[
    "venv",
    ".venv",
    "__pycache__",
    "node_modules",
    "target",
    "build",
    "dist",
];

/// Main analyze command implementation
pub async fn analyze_command(args: AnalyzeArgs) -> anyhow::Result<ExitStatus> {
    let mut config = load_configuration(args.config.as_deref())?;
    apply_cli_overrides(&mut config, &args);

    let engine = HarmonyEngine::new(config).context("Failed to build harmony engine")?;

    let files = discover_python_files(&args.paths)?;
    if files.is_empty() {
        warn!("No Python files found under the given paths");
    }
    info!("Discovered {} Python files", files.len());

    let mut adapter = PythonAdapter::new()?;
    let mut stats = AdapterStats::default();
    let mut units = Vec::new();
    let mut analyzed_files = 0;

    for file in &files {
        let source = match tokio::fs::read_to_string(file).await {
            Ok(source) => source,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", file.display(), e);
                continue;
            }
        };

        match adapter.parse_source(&source, &file.to_string_lossy()) {
            Ok(output) => {
                debug!("{}: {} units", file.display(), output.units.len());
                stats.absorb(&output.stats);
                units.extend(output.units);
                analyzed_files += 1;
            }
            Err(e) => warn!("Skipping unparseable file {}: {}", file.display(), e),
        }
    }

    let report = engine.report(&units);

    match args.format {
        OutputFormat::Text => display_text_report(&report, &stats, analyzed_files, args.show_all),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(report.exit_status())
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<ExitStatus> {
    println!("# Default harmonizer configuration");
    println!("# Save this to a file and customize as needed");
    println!("# Usage: harmonizer analyze --config your-config.yml <paths>");
    println!();

    let yaml_output = HarmonizerConfig::default().to_yaml()?;
    println!("{}", yaml_output);

    Ok(ExitStatus::Clean)
}

/// Validate configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<ExitStatus> {
    println!(
        "{} {}",
        "Validating configuration:".bright_blue().bold(),
        args.path.display().to_string().cyan()
    );
    println!();

    // building the engine also checks that lexicon overrides merge cleanly
    let outcome = load_configuration(Some(args.path.as_path())).and_then(|config| {
        let engine = HarmonyEngine::new(config.clone())?;
        Ok((config, engine.lexicon().len()))
    });

    match outcome {
        Ok((config, lexicon_entries)) => {
            println!("{}", "Configuration file is valid!".bright_green().bold());
            println!();
            display_config_summary(&config, lexicon_entries);
            Ok(ExitStatus::Clean)
        }
        Err(e) => {
            eprintln!("{} {:#}", "Configuration validation failed:".red(), e);
            eprintln!();
            eprintln!(
                "{}",
                "Tip: use 'harmonizer print-default-config' to see the valid format".dimmed()
            );
            Ok(ExitStatus::Error)
        }
    }
}

/// Load configuration from file or use defaults
pub fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<HarmonizerConfig> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            HarmonizerConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => HarmonizerConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Command-line flags win over file values.
fn apply_cli_overrides(config: &mut HarmonizerConfig, args: &AnalyzeArgs) {
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(top_n) = args.top_n {
        config.naming.top_n = top_n;
    }
    if args.no_suggest {
        config.naming.enabled = false;
    }
}

/// Expand the given paths into a sorted list of Python files.
///
/// Explicit file arguments are kept whatever their extension. Files reached
/// through more than one argument are listed once.
pub fn discover_python_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            bail!("Path does not exist: {}", path.display());
        }

        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let is_python = entry.path().extension().and_then(|ext| ext.to_str()) == Some("py");
            if entry.file_type().is_file() && is_python {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&&*name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discovery_skips_hidden_and_vendor_dirs() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("venv/lib")).unwrap();
        fs::create_dir_all(root.join("__pycache__")).unwrap();
        fs::write(root.join("pkg/service.py"), "def f():\n    pass\n").unwrap();
        fs::write(root.join("main.py"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join(".git/hook.py"), "").unwrap();
        fs::write(root.join("venv/lib/site.py"), "").unwrap();
        fs::write(root.join("__pycache__/cached.py"), "").unwrap();

        let files = discover_python_files(&[root.to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, ["main.py", "pkg/service.py"]);
    }

    #[test]
    fn test_overlapping_arguments_list_each_file_once() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("main.py"), "").unwrap();
        fs::write(root.join("util.py"), "").unwrap();

        let files = discover_python_files(&[
            root.to_path_buf(),
            root.join("main.py"),
            root.to_path_buf(),
        ])
        .unwrap();
        assert_eq!(files, [root.join("main.py"), root.join("util.py")]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let err = discover_python_files(&[PathBuf::from("/no/such/dir")]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_cli_flags_override_config() {
        let mut config = HarmonizerConfig::default();
        let args = AnalyzeArgs {
            paths: vec![PathBuf::from(".")],
            threshold: Some(0.9),
            config: None,
            format: OutputFormat::Json,
            top_n: Some(1),
            no_suggest: true,
            show_all: false,
        };
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.naming.top_n, 1);
        assert!(!config.naming.enabled);
    }
}
