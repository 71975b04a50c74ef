//! Main analysis engine implementation.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::analysis::extractor::{ConceptExtractor, ExtractionOptions};
use crate::analysis::resolver::{CacheStatistics, CoordinateResolver};
use crate::analysis::scoring::{score, IceResult, ThresholdPolicy};
use crate::analysis::tokenize::{split_identifier, NameStyle};
use crate::analysis::trajectory::explain;
use crate::analysis::unit::AnalysisUnit;
use crate::api::results::{AnalysisReport, UnitReport};
use crate::core::config::HarmonizerConfig;
use crate::core::errors::{Result, ResultExt};
use crate::lexicon::{Concept, Lexicon};
use crate::naming::{NamingRecommender, NamingSuggestion};

/// Fragments that join words in identifiers and never make useful nouns.
const CONNECTIVES: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "from", "in", "into", "of", "on", "or", "the",
    "to", "with",
];

/// Main harmony analysis engine.
///
/// Construction is the only fallible step: it validates the configuration
/// and builds the lexicon. Afterwards every unit yields a complete report.
#[derive(Debug)]
pub struct HarmonyEngine {
    config: HarmonizerConfig,
    lexicon: Arc<Lexicon>,
    extractor: ConceptExtractor,
    resolver: CoordinateResolver,
    policy: ThresholdPolicy,
    recommender: NamingRecommender,
}

impl HarmonyEngine {
    /// Create an engine from configuration, building the default lexicon
    /// and merging the configured overrides on top.
    pub fn new(config: HarmonizerConfig) -> Result<Self> {
        config.validate()?;

        let overrides = config.lexicon.document()?;
        let mut lexicon = Lexicon::defaults()?;
        if !overrides.is_empty() {
            lexicon = lexicon
                .merged(&overrides)
                .context("Failed to merge lexicon overrides")?;
        }
        Self::with_lexicon(config, lexicon)
    }

    /// Create an engine over an already built lexicon.
    pub fn with_lexicon(config: HarmonizerConfig, lexicon: Lexicon) -> Result<Self> {
        config.validate()?;

        let policy = ThresholdPolicy::new(config.threshold)?;
        let mut recommender = NamingRecommender::new();
        recommender.extend(&config.naming.extra_verbs)?;

        let lexicon = Arc::new(lexicon);
        let resolver = CoordinateResolver::with_memoization(
            Arc::clone(&lexicon),
            config.analysis.memoize,
        );
        let extractor = ConceptExtractor::new(ExtractionOptions {
            include_docs: config.analysis.include_docs,
        });

        info!(
            "Harmony engine ready: {} lexicon entries, {} naming verbs, threshold {}",
            lexicon.len(),
            recommender.len(),
            policy.threshold()
        );

        Ok(Self {
            config,
            lexicon,
            extractor,
            resolver,
            policy,
            recommender,
        })
    }

    /// Engine with the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HarmonizerConfig::default())
    }

    /// Configuration in effect
    pub fn config(&self) -> &HarmonizerConfig {
        &self.config
    }

    /// Frozen lexicon
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Score two concept lists directly.
    pub fn score_concepts(&self, intent: &[Concept], execution: &[Concept]) -> IceResult {
        score(self.resolver.resolve(intent), self.resolver.resolve(execution))
    }

    /// Analyze a single unit.
    pub fn analyze(&self, unit: &AnalysisUnit) -> UnitReport {
        let concepts = self.extractor.extract(unit);
        let ice = self.score_concepts(&concepts.intent, &concepts.execution);
        let disharmonious = self.policy.is_disharmonious(&ice);
        let trajectory = explain(&ice);

        let naming_suggestions = if disharmonious && self.config.naming.enabled {
            self.suggest_names(unit, &ice)
        } else {
            Vec::new()
        };

        debug!(
            "{}: distance {:.3} ({}), trajectory {}",
            unit.qualified_name(),
            ice.distance,
            ice.severity,
            trajectory.trajectory()
        );

        UnitReport {
            name: unit.name.clone(),
            location: unit.location.clone(),
            intent: ice.intent,
            execution: ice.execution,
            distance: ice.distance,
            severity: ice.severity,
            disharmonious,
            trajectory,
            naming_suggestions,
        }
    }

    /// Analyze many units, preserving input order.
    pub fn analyze_batch(&self, units: &[AnalysisUnit]) -> Vec<UnitReport> {
        info!("Analyzing {} units", units.len());
        if self.config.analysis.parallel {
            units.par_iter().map(|unit| self.analyze(unit)).collect()
        } else {
            units.iter().map(|unit| self.analyze(unit)).collect()
        }
    }

    /// Analyze many units and summarize them.
    pub fn report(&self, units: &[AnalysisUnit]) -> AnalysisReport {
        let reports = self.analyze_batch(units);
        let report = AnalysisReport::new(reports, self.policy.threshold());
        info!(
            "Analysis complete: {} units, {} disharmonious",
            report.summary.total_units, report.summary.disharmonious
        );
        report
    }

    /// Memo cache counters for the current run
    pub fn cache_statistics(&self) -> CacheStatistics {
        self.resolver.cache_statistics()
    }

    /// End the current run's memoization scope
    pub fn clear_cache(&self) {
        self.resolver.clear_cache();
    }

    /// Name fragments the lexicon leaves unresolved, treated as nouns.
    ///
    /// Fragments covered by a phrase match count as resolved; words known
    /// only under a qualified context stay nouns.
    pub fn noun_fragments(&self, name: &str) -> Vec<String> {
        let fragments = split_identifier(name);
        let concepts: Vec<Concept> = fragments
            .iter()
            .map(|fragment| Concept::free(fragment.as_str()))
            .collect();

        let mut resolved = vec![false; fragments.len()];
        for matched in self.lexicon.segment(&concepts) {
            resolved[matched.span].iter_mut().for_each(|r| *r = true);
        }

        fragments
            .into_iter()
            .zip(resolved)
            .filter(|(fragment, resolved)| !resolved && !CONNECTIVES.contains(&fragment.as_str()))
            .map(|(fragment, _)| fragment)
            .collect()
    }

    fn suggest_names(&self, unit: &AnalysisUnit, ice: &IceResult) -> Vec<NamingSuggestion> {
        let nouns = self.noun_fragments(&unit.name);
        let style = NameStyle::detect(&unit.name);
        let top_n = self.config.naming.top_n;

        // one extra candidate in case the current name comes back
        let mut suggestions = self.recommender.suggest_styled(
            &ice.execution.coordinate,
            &nouns,
            top_n + 1,
            style,
        );
        suggestions.retain(|s| s.name != unit.name.trim_matches('_'));
        suggestions.truncate(top_n);
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scoring::Severity;
    use crate::analysis::trajectory::Trajectory;
    use crate::analysis::unit::{NodeKind, StructuralNode};
    use crate::core::coordinate::{Axis, Coordinate};
    use crate::lexicon::LexiconOverride;

    #[test]
    fn test_query_name_with_destructive_body() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        let unit = AnalysisUnit::new("get_user", vec![StructuralNode::method_call("db", "delete")]);
        let report = engine.analyze(&unit);

        assert_eq!(report.severity, Severity::Critical);
        assert!(report.disharmonious);
        assert_eq!(
            report.trajectory.trajectory(),
            Trajectory::Shift {
                from: Axis::Wisdom,
                to: Axis::Power
            }
        );
        assert_eq!(report.naming_suggestions[0].name, "delete_user");
    }

    #[test]
    fn test_unknown_name_reports_only_the_exercised_axis() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        let unit = AnalysisUnit::new(
            "frobnicate_widget",
            vec![StructuralNode::method_call("db", "delete")],
        );
        let report = engine.analyze(&unit);

        assert!(report.intent.coordinate.is_zero());
        assert_eq!(report.trajectory.from, None);
        assert_eq!(report.trajectory.to, Some(Axis::Power));
        assert_eq!(
            report.trajectory.trajectory(),
            Trajectory::Toward { to: Axis::Power }
        );
        assert!(!report.trajectory.interpretation.contains("Love"));
    }

    #[test]
    fn test_harmonious_unit_has_no_suggestions() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        let unit = AnalysisUnit::new(
            "validate_and_save",
            vec![
                StructuralNode::call("check"),
                StructuralNode::method_call("repo", "save"),
            ],
        );
        let report = engine.analyze(&unit);
        assert!(!report.disharmonious);
        assert!(report.distance < 0.1);
        assert!(report.naming_suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_keep_identifier_style_and_skip_current_name() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        let unit = AnalysisUnit::new("fetchUser", vec![StructuralNode::leaf(NodeKind::Deletion)]);
        let report = engine.analyze(&unit);
        assert!(report
            .naming_suggestions
            .iter()
            .all(|s| s.name.ends_with("User") && s.name != "fetchUser"));
        assert!(report.naming_suggestions.len() <= 3);
    }

    #[test]
    fn test_noun_fragments_skip_known_words_and_connectives() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        assert_eq!(engine.noun_fragments("get_user_by_id"), ["user", "id"]);
        assert_eq!(engine.noun_fragments("validateAndSave"), Vec::<String>::new());
    }

    #[test]
    fn test_noun_fragments_respect_phrases_and_context_only_words() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        assert_eq!(engine.noun_fragments("look_up_user"), ["user"]);
        assert_eq!(engine.noun_fragments("get_error_count"), ["error"]);
    }

    #[test]
    fn test_phrase_words_stay_out_of_suggestions() {
        let engine = HarmonyEngine::with_defaults().unwrap();
        let unit = AnalysisUnit::new(
            "look_up_user",
            vec![StructuralNode::method_call("db", "delete")],
        );
        let report = engine.analyze(&unit);
        assert!(!report.naming_suggestions.is_empty());
        for suggestion in &report.naming_suggestions {
            assert!(suggestion.name.ends_with("_user"), "{}", suggestion.name);
            assert!(!suggestion.name.contains("look"), "{}", suggestion.name);
        }
    }

    #[test]
    fn test_batch_preserves_order_sequential_and_parallel() {
        let units: Vec<_> = (0..32)
            .map(|i| {
                let body = if i % 2 == 0 {
                    vec![StructuralNode::call("delete")]
                } else {
                    vec![StructuralNode::call("get")]
                };
                AnalysisUnit::new(format!("get_item_{i}"), body)
            })
            .collect();

        let parallel = HarmonyEngine::with_defaults().unwrap().analyze_batch(&units);
        let mut config = HarmonizerConfig::default();
        config.analysis.parallel = false;
        let sequential = HarmonyEngine::new(config).unwrap().analyze_batch(&units);

        assert_eq!(parallel, sequential);
        for (unit, report) in units.iter().zip(&parallel) {
            assert_eq!(unit.name, report.name);
        }
    }

    #[test]
    fn test_config_overrides_reach_the_lexicon() {
        let mut config = HarmonizerConfig::default();
        config.lexicon.overrides = vec![LexiconOverride::new(
            "frobnicate",
            Coordinate::new(0.0, 0.0, 1.0, 0.0).unwrap(),
        )]
        .into();
        let engine = HarmonyEngine::new(config).unwrap();
        assert!(engine.lexicon().contains("frobnicate"));
    }

    #[test]
    fn test_conflicting_overrides_fail_construction() {
        let mut config = HarmonizerConfig::default();
        config.lexicon.overrides = vec![
            LexiconOverride::new("render", Coordinate::new(0.0, 0.0, 1.0, 0.0).unwrap()),
            LexiconOverride::new("render", Coordinate::new(1.0, 0.0, 0.0, 0.0).unwrap()),
        ]
        .into();
        let err = HarmonyEngine::new(config).unwrap_err();
        assert!(err.is_construction());
    }

    #[test]
    fn test_cache_scope_spans_batch() {
        let mut config = HarmonizerConfig::default();
        config.analysis.parallel = false;
        let engine = HarmonyEngine::new(config).unwrap();
        let unit = AnalysisUnit::new("get_user", vec![StructuralNode::call("get")]);
        engine.analyze_batch(&[unit.clone(), unit.clone(), unit]);
        assert!(engine.cache_statistics().hits > 0);
        engine.clear_cache();
        assert_eq!(engine.cache_statistics().entries, 0);
    }
}
