//! User-supplied lexicon override documents.
//!
//! An override document is an ordered list of `(token, coordinates, context)`
//! triples. It can be embedded in the main configuration file under
//! `lexicon.overrides` or loaded on its own from YAML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::coordinate::Coordinate;
use crate::core::errors::{HarmonizerError, Result, ResultExt};
use crate::lexicon::context::ContextPredicate;

/// One override triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconOverride {
    /// Token or space-separated compound phrase
    pub token: String,
    /// `[love, justice, power, wisdom]`
    pub coordinates: Coordinate,
    /// Optional context tag, e.g. `receiver~seen`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextPredicate>,
}

impl LexiconOverride {
    /// Context-free override.
    pub fn new(token: impl Into<String>, coordinates: Coordinate) -> Self {
        Self {
            token: token.into(),
            coordinates,
            context: None,
        }
    }

    /// Override guarded by a context predicate.
    pub fn with_context(mut self, context: ContextPredicate) -> Self {
        self.context = Some(context);
        self
    }
}

/// Ordered override document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideDocument {
    entries: Vec<LexiconOverride>,
}

impl OverrideDocument {
    /// Document from an ordered list of overrides.
    pub fn new(entries: Vec<LexiconOverride>) -> Self {
        Self { entries }
    }

    /// Parse a YAML document (a JSON document is valid YAML too).
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a document from disk; `.json` files go through `serde_json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon overrides {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let document = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(document)
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[LexiconOverride] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append another document's entries after this one's.
    pub fn extend(&mut self, other: OverrideDocument) {
        self.entries.extend(other.entries);
    }

    /// Reject blank tokens before any merge is attempted.
    pub fn validate(&self) -> Result<()> {
        for (position, entry) in self.entries.iter().enumerate() {
            if entry.token.trim().is_empty() {
                return Err(HarmonizerError::validation_field(
                    format!("override #{position} has an empty token"),
                    "lexicon.overrides",
                ));
            }
        }
        Ok(())
    }
}

impl From<Vec<LexiconOverride>> for OverrideDocument {
    fn from(entries: Vec<LexiconOverride>) -> Self {
        Self::new(entries)
    }
}
