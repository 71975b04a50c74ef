//! Name suggestions by nearest-neighbour search over a verb table.
//!
//! Candidate verbs are ranked by cosine similarity to a unit's execution
//! coordinate and joined with the noun fragments of the current name.

mod verbs;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::tokenize::NameStyle;
use crate::core::coordinate::Coordinate;
use crate::core::errors::{HarmonizerError, Result};

use verbs::CURATED_VERBS;

/// Verb supplied through configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbDefinition {
    /// Lowercase verb
    pub verb: String,
    /// `[love, justice, power, wisdom]`
    pub coordinates: Coordinate,
}

/// One candidate name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingSuggestion {
    /// Synthesized identifier
    pub name: String,
    /// Verb the name was built from
    pub verb: String,
    /// Cosine similarity of the verb to the execution coordinate, in `[-1, 1]`
    pub similarity: f64,
    /// Why the verb was picked
    pub rationale: String,
}

#[derive(Debug, Clone)]
struct VerbEntry {
    verb: String,
    coordinate: Coordinate,
}

/// Ranks verbs against execution coordinates.
#[derive(Debug, Clone)]
pub struct NamingRecommender {
    verbs: Vec<VerbEntry>,
}

impl Default for NamingRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingRecommender {
    /// Recommender over the curated verb table.
    pub fn new() -> Self {
        let verbs = CURATED_VERBS
            .iter()
            .map(|(verb, weights)| VerbEntry {
                verb: verb.to_string(),
                coordinate: Coordinate::from_table(*weights),
            })
            .collect();
        Self { verbs }
    }

    /// Append configured verbs.
    ///
    /// A verb already in the table is accepted only with identical weights.
    pub fn extend(&mut self, extra: &[VerbDefinition]) -> Result<()> {
        for definition in extra {
            let verb = definition.verb.trim().to_lowercase();
            if verb.is_empty() || verb.contains(char::is_whitespace) {
                return Err(HarmonizerError::validation_field(
                    format!("naming verb '{}' must be a single word", definition.verb),
                    "naming.extra_verbs",
                ));
            }
            match self.verbs.iter().find(|entry| entry.verb == verb) {
                Some(existing) if existing.coordinate == definition.coordinates => continue,
                Some(existing) => {
                    return Err(HarmonizerError::construction_for_key(
                        format!(
                            "naming verb '{}' is already mapped to {}, refusing {}",
                            verb, existing.coordinate, definition.coordinates
                        ),
                        verb,
                        None,
                    ));
                }
                None => self.verbs.push(VerbEntry {
                    verb,
                    coordinate: definition.coordinates,
                }),
            }
        }
        debug!("Naming table holds {} verbs", self.verbs.len());
        Ok(())
    }

    /// Number of candidate verbs
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Top `top_n` snake_case suggestions.
    pub fn suggest(
        &self,
        execution: &Coordinate,
        nouns: &[String],
        top_n: usize,
    ) -> Vec<NamingSuggestion> {
        self.suggest_styled(execution, nouns, top_n, NameStyle::Snake)
    }

    /// Top `top_n` suggestions in the given casing style.
    ///
    /// Sorted by non-increasing similarity; ties keep table order. A zero
    /// execution coordinate has no direction, so nothing is suggested.
    pub fn suggest_styled(
        &self,
        execution: &Coordinate,
        nouns: &[String],
        top_n: usize,
        style: NameStyle,
    ) -> Vec<NamingSuggestion> {
        if top_n == 0 || execution.is_zero() {
            return Vec::new();
        }

        let mut ranked: Vec<(&VerbEntry, f64)> = self
            .verbs
            .iter()
            .filter_map(|entry| {
                execution
                    .cosine_similarity(&entry.coordinate)
                    .map(|similarity| (entry, similarity))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_n);

        let profile = execution
            .dominant_axis()
            .map(|axis| format!("{axis}-dominant ({})", axis.meaning()))
            .unwrap_or_else(|| "mixed".to_string());

        ranked
            .into_iter()
            .map(|(entry, similarity)| {
                let mut fragments = Vec::with_capacity(nouns.len() + 1);
                fragments.push(entry.verb.as_str());
                fragments.extend(nouns.iter().map(String::as_str));
                NamingSuggestion {
                    name: style.join(&fragments[..]),
                    verb: entry.verb.clone(),
                    similarity,
                    rationale: format!(
                        "'{}' matches the {} body with similarity {:.2}",
                        entry.verb, profile, similarity
                    ),
                }
            })
            .collect()
    }
}
