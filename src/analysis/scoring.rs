//! Intent/execution distance and severity tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::resolver::SemanticResult;
use crate::core::errors::{HarmonizerError, Result};

/// Default pass/fail disharmony threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Descriptive severity tier of a distance.
///
/// Tiers are fixed and ordered; `Ord` follows escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// distance < 0.3
    Excellent,
    /// 0.3 <= distance < 0.5
    Harmonious,
    /// 0.5 <= distance < 0.8
    Review,
    /// 0.8 <= distance < 1.2
    Attention,
    /// distance >= 1.2
    Critical,
}

impl Severity {
    /// All tiers in escalation order
    pub const ALL: [Severity; 5] = [
        Severity::Excellent,
        Severity::Harmonious,
        Severity::Review,
        Severity::Attention,
        Severity::Critical,
    ];

    /// Classify a distance.
    pub fn from_distance(distance: f64) -> Self {
        debug_assert!(distance.is_finite() && distance >= 0.0);
        if distance < 0.3 {
            Severity::Excellent
        } else if distance < 0.5 {
            Severity::Harmonious
        } else if distance < 0.8 {
            Severity::Review
        } else if distance < 1.2 {
            Severity::Attention
        } else {
            Severity::Critical
        }
    }

    /// Lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Excellent => "excellent",
            Severity::Harmonious => "harmonious",
            Severity::Review => "review",
            Severity::Attention => "attention",
            Severity::Critical => "critical",
        }
    }

    /// Tiers that need a human to look at the unit
    pub fn needs_attention(&self) -> bool {
        *self >= Severity::Review
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scored pair of intent and execution results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IceResult {
    /// From name and documentation
    pub intent: SemanticResult,
    /// From the body
    pub execution: SemanticResult,
    /// Euclidean distance between the two coordinates
    pub distance: f64,
    /// Tier of `distance`
    pub severity: Severity,
}

/// Score an intent/execution pair.
///
/// Total for finite coordinates. Coordinates are validated on construction,
/// so a non-finite value here is a bug upstream.
pub fn score(intent: SemanticResult, execution: SemanticResult) -> IceResult {
    let distance = intent.coordinate.distance(&execution.coordinate);
    debug_assert!(distance.is_finite(), "non-finite coordinate reached scoring");
    IceResult {
        intent,
        execution,
        distance,
        severity: Severity::from_distance(distance),
    }
}

/// User-configurable pass/fail cut, independent of the tier labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    threshold: f64,
}

impl ThresholdPolicy {
    /// Policy failing units whose distance is at or above `threshold`.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(HarmonizerError::validation_field(
                format!("threshold must be a finite non-negative number, got {threshold}"),
                "threshold",
            ));
        }
        Ok(Self { threshold })
    }

    /// Configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a result fails the threshold.
    pub fn is_disharmonious(&self, result: &IceResult) -> bool {
        result.distance >= self.threshold
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
