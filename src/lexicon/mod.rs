//! Token -> coordinate lexicon.
//!
//! A [`LexiconBuilder`] collects built-in entries and user overrides, checking
//! every registration against what is already there. Conflicts are
//! construction errors; there is no last-write-wins. The only replacement
//! allowed is a user entry explicitly overriding a built-in one, which is
//! logged. [`LexiconBuilder::build`] freezes the table into a [`Lexicon`]
//! that is shared read-only between workers.
//!
//! Context-qualified entries live next to the context-free entry for the same
//! token as an ordered rule list. Lookup walks the rules top-down and falls
//! back to the context-free entry.

pub mod context;
mod defaults;
pub mod overrides;


use std::borrow::Cow;
use std::ops::Range;

use ahash::AHashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::coordinate::Coordinate;
use crate::core::errors::{HarmonizerError, Result};

pub use context::{Concept, ConceptContext, ContextPredicate};
pub use overrides::{LexiconOverride, OverrideDocument};

use defaults::{BUILTIN_CONTEXT_RULES, BUILTIN_PHRASES, BUILTIN_WORDS};

/// Who registered an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrigin {
    /// Shipped calibration table
    Builtin,
    /// Registered by the caller or an override document
    User,
}

#[derive(Debug, Clone)]
struct Weighted {
    coordinate: Coordinate,
    origin: EntryOrigin,
}

#[derive(Debug, Clone)]
struct ContextRule {
    predicate: ContextPredicate,
    weighted: Weighted,
}

#[derive(Debug, Clone, Default)]
struct TokenEntry {
    base: Option<Weighted>,
    rules: SmallVec<[ContextRule; 2]>,
}

impl TokenEntry {
    fn resolve(&self, context: &ConceptContext) -> Option<Coordinate> {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(context))
            .map(|rule| rule.weighted.coordinate)
            .or_else(|| self.base.as_ref().map(|w| w.coordinate))
    }

    fn slot_mut(&mut self, context: Option<&ContextPredicate>) -> Option<&mut Weighted> {
        match context {
            None => self.base.as_mut(),
            Some(predicate) => self
                .rules
                .iter_mut()
                .find(|rule| &rule.predicate == predicate)
                .map(|rule| &mut rule.weighted),
        }
    }
}

/// Flattened view of one literal lexicon key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Normalized token or phrase
    pub token: String,
    /// Weight contributed when the entry applies
    pub coordinate: Coordinate,
    /// Guard, `None` for the context-free entry
    pub context: Option<ContextPredicate>,
    /// Who registered it
    pub origin: EntryOrigin,
}

/// What a single registration did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertOutcome {
    /// New key
    Inserted,
    /// Same key with the same coordinate already present
    Unchanged,
    /// User entry replaced a built-in one
    Overrode {
        /// Built-in weight that was replaced
        previous: Coordinate,
    },
}

/// Tally of a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// New keys added
    pub inserted: usize,
    /// Entries already present with identical weights
    pub unchanged: usize,
    /// Built-in entries replaced
    pub overridden: usize,
}

/// A resolved span of a concept sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconMatch {
    /// Key that matched (phrase keys contain spaces)
    pub key: String,
    /// Concept indices covered by the match
    pub span: Range<usize>,
    /// Weight contributed
    pub coordinate: Coordinate,
}

impl LexiconMatch {
    /// Whether the match covers more than one concept.
    pub fn is_phrase(&self) -> bool {
        self.span.len() > 1
    }
}

/// Mutable lexicon under construction.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    entries: IndexMap<String, TokenEntry>,
    phrase_lengths: AHashMap<String, usize>,
}

impl LexiconBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with the built-in calibration tables.
    pub fn with_defaults() -> Result<Self> {
        let mut builder = Self::new();
        for (token, weights) in BUILTIN_WORDS.iter().chain(BUILTIN_PHRASES) {
            builder.insert(
                token,
                Coordinate::from_table(*weights),
                None,
                EntryOrigin::Builtin,
            )?;
        }
        for (token, tag, weights) in BUILTIN_CONTEXT_RULES {
            let predicate = ContextPredicate::parse(tag)?;
            builder.insert(
                token,
                Coordinate::from_table(*weights),
                Some(predicate),
                EntryOrigin::Builtin,
            )?;
        }
        debug!(
            "Built-in lexicon loaded: {} keys, {} phrase heads",
            builder.entries.len(),
            builder.phrase_lengths.len()
        );
        Ok(builder)
    }

    /// Register a user entry.
    ///
    /// Fails if the same `(token, context)` key is already registered with a
    /// different coordinate, unless the existing entry is built-in.
    pub fn register(
        &mut self,
        token: &str,
        coordinate: Coordinate,
        context: Option<ContextPredicate>,
    ) -> Result<&mut Self> {
        self.insert(token, coordinate, context, EntryOrigin::User)?;
        Ok(self)
    }

    /// Apply an override document.
    ///
    /// The merge is all-or-nothing: on error the builder is left untouched.
    /// Merging the same document twice is a no-op the second time.
    pub fn merge(&mut self, document: &OverrideDocument) -> Result<MergeReport> {
        document.validate()?;

        let mut staged = self.clone();
        let mut report = MergeReport::default();
        for entry in document.entries() {
            match staged.insert(
                &entry.token,
                entry.coordinates,
                entry.context.clone(),
                EntryOrigin::User,
            )? {
                InsertOutcome::Inserted => report.inserted += 1,
                InsertOutcome::Unchanged => report.unchanged += 1,
                InsertOutcome::Overrode { .. } => report.overridden += 1,
            }
        }
        *self = staged;

        info!(
            "Merged lexicon overrides: {} inserted, {} overridden, {} unchanged",
            report.inserted, report.overridden, report.unchanged
        );
        Ok(report)
    }

    /// Freeze into an immutable lexicon.
    pub fn build(self) -> Lexicon {
        let max_phrase_len = self.phrase_lengths.values().copied().max().unwrap_or(1);
        Lexicon {
            entries: self.entries,
            phrase_lengths: self.phrase_lengths,
            max_phrase_len,
        }
    }

    fn insert(
        &mut self,
        token: &str,
        coordinate: Coordinate,
        context: Option<ContextPredicate>,
        origin: EntryOrigin,
    ) -> Result<InsertOutcome> {
        let key = normalize_key(token).into_owned();
        if key.is_empty() {
            return Err(HarmonizerError::construction(
                "lexicon tokens must not be empty",
            ));
        }
        let tag = context.as_ref().map(ContextPredicate::tag);
        let words: Vec<&str> = key.split(' ').collect();

        let entry = self.entries.entry(key.clone()).or_default();
        if let Some(existing) = entry.slot_mut(context.as_ref()) {
            if existing.coordinate == coordinate {
                // a user restating a built-in value claims the slot
                if origin == EntryOrigin::User {
                    existing.origin = EntryOrigin::User;
                }
                return Ok(InsertOutcome::Unchanged);
            }
            if existing.origin == EntryOrigin::Builtin && origin == EntryOrigin::User {
                let previous = existing.coordinate;
                *existing = Weighted { coordinate, origin };
                info!(
                    "Overriding built-in lexicon entry '{}'{}: {} -> {}",
                    key,
                    tag.as_deref()
                        .map(|t| format!(" [{t}]"))
                        .unwrap_or_default(),
                    previous,
                    coordinate
                );
                return Ok(InsertOutcome::Overrode { previous });
            }
            return Err(HarmonizerError::construction_for_key(
                format!(
                    "conflicting lexicon entry for '{}': already mapped to {}, refusing {}",
                    key, existing.coordinate, coordinate
                ),
                key.clone(),
                tag,
            ));
        }

        let weighted = Weighted { coordinate, origin };
        match context {
            None => entry.base = Some(weighted),
            Some(predicate) => entry.rules.push(ContextRule {
                predicate,
                weighted,
            }),
        }

        if words.len() > 1 {
            let longest = self.phrase_lengths.entry(words[0].to_string()).or_insert(1);
            *longest = (*longest).max(words.len());
        }
        Ok(InsertOutcome::Inserted)
    }
}

/// Frozen, validated lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: IndexMap<String, TokenEntry>,
    phrase_lengths: AHashMap<String, usize>,
    max_phrase_len: usize,
}

impl Lexicon {
    /// The built-in lexicon with no overrides.
    pub fn defaults() -> Result<Self> {
        Ok(LexiconBuilder::with_defaults()?.build())
    }

    /// Weight for a token in a context; `None` for unknown tokens.
    ///
    /// Context-qualified entries win over the context-free entry.
    pub fn lookup(&self, token: &str, context: &ConceptContext) -> Option<Coordinate> {
        let key = normalize_key(token);
        self.entries.get(key.as_ref())?.resolve(context)
    }

    /// Whether any entry (context-free or qualified) exists for the token.
    pub fn contains(&self, token: &str) -> bool {
        let key = normalize_key(token);
        self.entries
            .get(key.as_ref())
            .map(|entry| entry.base.is_some() || !entry.rules.is_empty())
            .unwrap_or(false)
    }

    /// Number of literal `(token, context)` keys.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .map(|entry| usize::from(entry.base.is_some()) + entry.rules.len())
            .sum()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of compound phrase keys.
    pub fn phrase_count(&self) -> usize {
        self.entries.keys().filter(|key| key.contains(' ')).count()
    }

    /// All literal keys in registration order.
    pub fn entries(&self) -> impl Iterator<Item = LexiconEntry> + '_ {
        self.entries.iter().flat_map(|(token, entry)| {
            let base = entry.base.iter().map(move |w| LexiconEntry {
                token: token.clone(),
                coordinate: w.coordinate,
                context: None,
                origin: w.origin,
            });
            let rules = entry.rules.iter().map(move |rule| LexiconEntry {
                token: token.clone(),
                coordinate: rule.weighted.coordinate,
                context: Some(rule.predicate.clone()),
                origin: rule.weighted.origin,
            });
            base.chain(rules)
        })
    }

    /// Builder holding a copy of this lexicon, for layering further overrides.
    pub fn to_builder(&self) -> LexiconBuilder {
        LexiconBuilder {
            entries: self.entries.clone(),
            phrase_lengths: self.phrase_lengths.clone(),
        }
    }

    /// New lexicon with the document merged on top of this one.
    pub fn merged(&self, document: &OverrideDocument) -> Result<Lexicon> {
        let mut builder = self.to_builder();
        builder.merge(document)?;
        Ok(builder.build())
    }

    /// Resolve a concept sequence into weighted spans.
    ///
    /// Phrases are matched greedily, longest first, and only across concepts
    /// observed in the same context. Unresolved concepts are skipped.
    pub fn segment(&self, concepts: &[Concept]) -> Vec<LexiconMatch> {
        let mut matches = Vec::new();
        let mut index = 0;

        'outer: while index < concepts.len() {
            let head = &concepts[index];
            let head_key = normalize_key(&head.token);

            if self.max_phrase_len > 1 {
                if let Some(&longest) = self.phrase_lengths.get(head_key.as_ref()) {
                    let available = concepts.len() - index;
                    for len in (2..=longest.min(available)).rev() {
                        let window = &concepts[index..index + len];
                        if window.iter().any(|c| c.context != head.context) {
                            continue;
                        }
                        let phrase = window
                            .iter()
                            .map(|c| normalize_key(&c.token))
                            .collect::<Vec<_>>()
                            .join(" ");
                        if let Some(coordinate) = self.lookup(&phrase, &head.context) {
                            matches.push(LexiconMatch {
                                key: phrase,
                                span: index..index + len,
                                coordinate,
                            });
                            index += len;
                            continue 'outer;
                        }
                    }
                }
            }

            if let Some(coordinate) = self.lookup(&head_key, &head.context) {
                matches.push(LexiconMatch {
                    key: head_key.into_owned(),
                    span: index..index + 1,
                    coordinate,
                });
            }
            index += 1;
        }

        matches
    }
}

/// Lowercase, trim, and collapse internal whitespace; borrows when already normal.
fn normalize_key(raw: &str) -> Cow<'_, str> {
    let is_normal = !raw.is_empty()
        && !raw.starts_with(' ')
        && !raw.ends_with(' ')
        && !raw.contains("  ")
        && raw
            .chars()
            .all(|c| !c.is_uppercase() && (c == ' ' || !c.is_whitespace()));
    if is_normal {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" "),
    )
}
