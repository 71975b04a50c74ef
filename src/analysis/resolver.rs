//! Folding concept sequences into single coordinates.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::coordinate::Coordinate;
use crate::lexicon::{Concept, Lexicon};

/// Resolved coordinate of one concept list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemanticResult {
    /// Centroid of the resolved weights
    #[serde(rename = "coordinates")]
    pub coordinate: Coordinate,
    /// Number of lexicon matches that contributed (a phrase counts once)
    pub concept_count: usize,
    /// `1 / (1 + σ)` over the centroid's components; 0 when nothing resolved
    pub clarity: f64,
}

impl SemanticResult {
    /// Result for a list where nothing resolved.
    pub const DEGENERATE: SemanticResult = SemanticResult {
        coordinate: Coordinate::ZERO,
        concept_count: 0,
        clarity: 0.0,
    };

    /// Whether no concept resolved. Low confidence, not an error.
    pub fn is_degenerate(&self) -> bool {
        self.concept_count == 0
    }
}

/// Memo cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatistics {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups that had to be computed
    pub misses: usize,
    /// Entries currently cached
    pub entries: usize,
}

impl CacheStatistics {
    /// Calculate cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

type MemoMap = DashMap<Vec<Concept>, SemanticResult, ahash::RandomState>;

/// Lexicon-weighted averaging with a per-run memo cache.
///
/// The cache is keyed by the full concept sequence, contexts included, and
/// is safe to share between worker threads.
#[derive(Debug)]
pub struct CoordinateResolver {
    lexicon: Arc<Lexicon>,
    cache: MemoMap,
    memoize: bool,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CoordinateResolver {
    /// Create a memoizing resolver over a frozen lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_memoization(lexicon, true)
    }

    /// Create a resolver, optionally without memoization
    pub fn with_memoization(lexicon: Arc<Lexicon>, memoize: bool) -> Self {
        Self {
            lexicon,
            cache: DashMap::with_hasher(ahash::RandomState::new()),
            memoize,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Lexicon used for lookups
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Resolve a concept sequence.
    ///
    /// Phrases are matched before single tokens; unknown tokens are dropped.
    /// An empty or fully unknown sequence gives [`SemanticResult::DEGENERATE`].
    pub fn resolve(&self, concepts: &[Concept]) -> SemanticResult {
        if !self.memoize {
            return self.compute(concepts);
        }

        if let Some(cached) = self.cache.get(concepts) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *cached;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = self.compute(concepts);
        // concurrent writers compute the same value, so a lost race is harmless
        self.cache.insert(concepts.to_vec(), result);
        result
    }

    fn compute(&self, concepts: &[Concept]) -> SemanticResult {
        let matches = self.lexicon.segment(concepts);
        let Some(centroid) = Coordinate::centroid(matches.iter().map(|m| &m.coordinate)) else {
            debug!("No concepts resolved out of {}", concepts.len());
            return SemanticResult::DEGENERATE;
        };

        SemanticResult {
            coordinate: centroid,
            concept_count: matches.len(),
            clarity: 1.0 / (1.0 + centroid.spread()),
        }
    }

    /// Current cache counters
    pub fn cache_statistics(&self) -> CacheStatistics {
        CacheStatistics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.len(),
        }
    }

    /// Drop cached results and reset counters, ending the current run's scope.
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
