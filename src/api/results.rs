//! Analysis results and reporting structures.

use serde::{Deserialize, Serialize};

use crate::analysis::resolver::SemanticResult;
use crate::analysis::scoring::{IceResult, Severity};
use crate::analysis::trajectory::TrajectoryReport;
use crate::analysis::unit::SourceLocation;
use crate::naming::NamingSuggestion;

/// Complete result for one analysis unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReport {
    /// Declared name
    pub name: String,
    /// Declaration site, when the adapter knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    /// Resolved name and documentation
    pub intent: SemanticResult,
    /// Resolved body
    pub execution: SemanticResult,
    /// Euclidean distance between intent and execution
    pub distance: f64,
    /// Descriptive tier of `distance`
    pub severity: Severity,
    /// Whether `distance` reached the configured threshold
    pub disharmonious: bool,
    /// Per-axis explanation
    pub trajectory: TrajectoryReport,
    /// Alternative names, only for disharmonious units
    #[serde(default)]
    pub naming_suggestions: Vec<NamingSuggestion>,
}

impl UnitReport {
    /// The scored pair behind this report.
    pub fn ice(&self) -> IceResult {
        IceResult {
            intent: self.intent,
            execution: self.execution,
            distance: self.distance,
            severity: self.severity,
        }
    }

    /// `Container.name` when the location carries a container.
    pub fn qualified_name(&self) -> String {
        match self.location.as_ref().and_then(|l| l.container.as_deref()) {
            Some(container) => format!("{container}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Either side resolved nothing; the score is low-confidence.
    pub fn is_low_confidence(&self) -> bool {
        self.intent.is_degenerate() || self.execution.is_degenerate()
    }
}

/// Unit counts per severity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// distance < 0.3
    pub excellent: usize,
    /// 0.3 <= distance < 0.5
    pub harmonious: usize,
    /// 0.5 <= distance < 0.8
    pub review: usize,
    /// 0.8 <= distance < 1.2
    pub attention: usize,
    /// distance >= 1.2
    pub critical: usize,
}

impl SeverityCounts {
    /// Count one unit
    pub fn record(&mut self, severity: Severity) {
        *self.slot_mut(severity) += 1;
    }

    /// Count for a tier
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Excellent => self.excellent,
            Severity::Harmonious => self.harmonious,
            Severity::Review => self.review,
            Severity::Attention => self.attention,
            Severity::Critical => self.critical,
        }
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::Excellent => &mut self.excellent,
            Severity::Harmonious => &mut self.harmonious,
            Severity::Review => &mut self.review,
            Severity::Attention => &mut self.attention,
            Severity::Critical => &mut self.critical,
        }
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Units analyzed
    pub total_units: usize,
    /// Units at or over the threshold
    pub disharmonious: usize,
    /// Units where intent or execution resolved nothing
    pub low_confidence: usize,
    /// Units per tier
    pub severity_counts: SeverityCounts,
    /// Worst tier among disharmonious units
    pub worst_severity: Option<Severity>,
    /// Mean distance over all units
    pub mean_distance: f64,
    /// Largest distance seen
    pub max_distance: f64,
    /// Threshold the units were judged against
    pub threshold: f64,
}

impl AnalysisSummary {
    /// Summarize a set of reports.
    pub fn from_reports(reports: &[UnitReport], threshold: f64) -> Self {
        let mut counts = SeverityCounts::default();
        let mut disharmonious = 0;
        let mut low_confidence = 0;
        let mut worst_severity = None;
        let mut total_distance = 0.0;
        let mut max_distance: f64 = 0.0;

        for report in reports {
            counts.record(report.severity);
            total_distance += report.distance;
            max_distance = max_distance.max(report.distance);
            if report.is_low_confidence() {
                low_confidence += 1;
            }
            if report.disharmonious {
                disharmonious += 1;
                worst_severity = worst_severity.max(Some(report.severity));
            }
        }

        let mean_distance = if reports.is_empty() {
            0.0
        } else {
            total_distance / reports.len() as f64
        };

        Self {
            total_units: reports.len(),
            disharmonious,
            low_confidence,
            severity_counts: counts,
            worst_severity,
            mean_distance,
            max_distance,
            threshold,
        }
    }

    /// Process exit status for this summary
    pub fn exit_status(&self) -> ExitStatus {
        match self.worst_severity {
            None => ExitStatus::Clean,
            Some(Severity::Critical) => ExitStatus::Critical,
            Some(Severity::Attention) => ExitStatus::Attention,
            Some(_) => ExitStatus::Review,
        }
    }
}

/// Tiered process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitStatus {
    /// Nothing reached the threshold
    Clean,
    /// Disharmony below the attention tier
    Review,
    /// Worst disharmony in the attention tier
    Attention,
    /// Worst disharmony in the critical tier
    Critical,
    /// Analysis could not run
    Error,
}

impl ExitStatus {
    /// Numeric process exit code
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Review => 1,
            ExitStatus::Attention => 2,
            ExitStatus::Critical => 3,
            ExitStatus::Error => 4,
        }
    }
}

/// Reports plus their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// One entry per analyzed unit, in input order
    pub units: Vec<UnitReport>,
    /// Totals over `units`
    pub summary: AnalysisSummary,
}

impl AnalysisReport {
    /// Wrap reports with their summary.
    pub fn new(units: Vec<UnitReport>, threshold: f64) -> Self {
        let summary = AnalysisSummary::from_reports(&units, threshold);
        Self { units, summary }
    }

    /// Empty report
    pub fn empty(threshold: f64) -> Self {
        Self::new(Vec::new(), threshold)
    }

    /// Units at or over the threshold
    pub fn disharmonious(&self) -> impl Iterator<Item = &UnitReport> {
        self.units.iter().filter(|unit| unit.disharmonious)
    }

    /// Exit status derived from the summary
    pub fn exit_status(&self) -> ExitStatus {
        self.summary.exit_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scoring::score;
    use crate::analysis::trajectory::explain;
    use crate::core::coordinate::Coordinate;

    fn report(distance_target: [f64; 4], threshold: f64) -> UnitReport {
        let intent = SemanticResult {
            coordinate: Coordinate::ZERO,
            concept_count: 1,
            clarity: 1.0,
        };
        let coordinate = Coordinate::from_array(distance_target).unwrap();
        let execution = SemanticResult {
            coordinate,
            concept_count: 1,
            clarity: 1.0 / (1.0 + coordinate.spread()),
        };
        let ice = score(intent, execution);
        UnitReport {
            name: "unit".to_string(),
            location: None,
            intent,
            execution,
            distance: ice.distance,
            severity: ice.severity,
            disharmonious: ice.distance >= threshold,
            trajectory: explain(&ice),
            naming_suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_summary_counts_and_worst() {
        let reports = vec![
            report([0.1, 0.0, 0.0, 0.0], 0.5),
            report([0.0, 0.6, 0.0, 0.0], 0.5),
            report([0.0, 0.0, 1.3, 0.0], 0.5),
        ];
        let summary = AnalysisSummary::from_reports(&reports, 0.5);
        assert_eq!(summary.total_units, 3);
        assert_eq!(summary.disharmonious, 2);
        assert_eq!(summary.severity_counts.get(Severity::Excellent), 1);
        assert_eq!(summary.severity_counts.get(Severity::Review), 1);
        assert_eq!(summary.severity_counts.get(Severity::Critical), 1);
        assert_eq!(summary.worst_severity, Some(Severity::Critical));
        assert!((summary.max_distance - 1.3).abs() < 1e-12);
        assert_eq!(summary.exit_status().code(), 3);
    }

    #[test]
    fn test_exit_status_tiers() {
        let clean = AnalysisReport::new(vec![report([0.2, 0.0, 0.0, 0.0], 0.5)], 0.5);
        assert_eq!(clean.exit_status(), ExitStatus::Clean);

        let attention = AnalysisReport::new(vec![report([0.9, 0.0, 0.0, 0.0], 0.5)], 0.5);
        assert_eq!(attention.exit_status(), ExitStatus::Attention);

        // over a lowered threshold but below the review tier
        let low = AnalysisReport::new(vec![report([0.35, 0.0, 0.0, 0.0], 0.3)], 0.3);
        assert_eq!(low.exit_status(), ExitStatus::Review);
        assert_eq!(low.exit_status().code(), 1);

        // severe but under a raised threshold
        let lenient = AnalysisReport::new(vec![report([0.9, 0.0, 0.0, 0.0], 1.0)], 1.0);
        assert_eq!(lenient.exit_status(), ExitStatus::Clean);
    }

    #[test]
    fn test_empty_report() {
        let report = AnalysisReport::empty(0.5);
        assert_eq!(report.summary.total_units, 0);
        assert_eq!(report.summary.mean_distance, 0.0);
        assert_eq!(report.exit_status(), ExitStatus::Clean);
    }

    #[test]
    fn test_unit_report_json_projection() {
        let unit = report([0.0, 0.0, 1.0, 0.0], 0.5);
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["intent"]["coordinates"], serde_json::json!([0.0, 0.0, 0.0, 0.0]));
        assert_eq!(json["execution"]["concept_count"], 1);
        assert_eq!(json["severity"], "attention");
        assert_eq!(json["trajectory"]["to"], "power");
        assert!(json["naming_suggestions"].as_array().unwrap().is_empty());
    }
}
