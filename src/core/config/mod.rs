//! Configuration types and management for harmonizer-rs.
//!
//! Every section has serde defaults, so an empty file is a valid
//! configuration. Files ending in `.json` are read with `serde_json`,
//! everything else as YAML.

pub mod validation;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::scoring::DEFAULT_THRESHOLD;
use crate::core::errors::{HarmonizerError, Result};
use crate::lexicon::OverrideDocument;
use crate::naming::VerbDefinition;

pub use validation::{validate_non_negative, validate_positive_usize, validate_verb_definitions};

/// Main configuration for the harmony engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonizerConfig {
    /// Distance at or above which a unit counts as disharmonious
    #[serde(default = "HarmonizerConfig::default_threshold")]
    pub threshold: f64,
    /// Extraction and resolution settings
    #[serde(default)]
    pub analysis: AnalysisSettings,
    /// Name suggestion settings
    #[serde(default)]
    pub naming: NamingConfig,
    /// Lexicon overrides
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl Default for HarmonizerConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            analysis: AnalysisSettings::default(),
            naming: NamingConfig::default(),
            lexicon: LexiconConfig::default(),
        }
    }
}

impl HarmonizerConfig {
    const fn default_threshold() -> f64 {
        DEFAULT_THRESHOLD
    }

    /// Load configuration from a YAML or JSON file.
    ///
    /// Relative `lexicon.files` entries are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarmonizerError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let mut config = if has_extension(path, "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
        .map_err(|e| {
            HarmonizerError::config(format!("Invalid config file {}: {e}", path.display()))
        })?;

        if let Some(base) = path.parent() {
            config.lexicon.resolve_paths(base);
        }
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse YAML configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = self.to_yaml()?;
        std::fs::write(&path, content).map_err(|e| {
            HarmonizerError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        validate_non_negative(self.threshold, "threshold")?;
        self.naming.validate()?;
        self.lexicon.validate()?;
        Ok(())
    }
}

/// Extraction and resolution settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Feed docstrings into intent
    pub include_docs: bool,
    /// Analyze units on the rayon pool
    pub parallel: bool,
    /// Memoize resolved concept sequences for the run
    pub memoize: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            include_docs: true,
            parallel: true,
            memoize: true,
        }
    }
}

/// Name suggestion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suggest names for disharmonious units
    pub enabled: bool,
    /// Maximum suggestions per unit
    pub top_n: usize,
    /// Verbs appended to the curated table
    pub extra_verbs: Vec<VerbDefinition>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            top_n: 3,
            extra_verbs: Vec::new(),
        }
    }
}

impl NamingConfig {
    /// Validate naming settings
    pub fn validate(&self) -> Result<()> {
        validate_positive_usize(self.top_n, "naming.top_n")?;
        validate_verb_definitions(&self.extra_verbs, "naming.extra_verbs")?;
        Ok(())
    }
}

/// Lexicon override settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Standalone override documents, merged first and in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,
    /// Inline overrides, merged after `files`
    pub overrides: OverrideDocument,
}

impl LexiconConfig {
    /// Validate inline overrides
    pub fn validate(&self) -> Result<()> {
        self.overrides.validate()
    }

    /// Combined override document: every file in order, then inline entries.
    pub fn document(&self) -> Result<OverrideDocument> {
        let mut document = OverrideDocument::default();
        for file in &self.files {
            document.extend(OverrideDocument::from_file(file)?);
        }
        document.extend(self.overrides.clone());
        Ok(document)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for file in &mut self.files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}
