//! Per-axis explanation of a disharmony score.
//!
//! Pure presentation over an [`IceResult`]: deltas are `execution - intent`
//! per axis, the most negative delta is what the name over-promised, the
//! most positive is what the body actually exercises. Either side may be
//! absent when no axis clearly moved that way.

pub mod templates;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::scoring::IceResult;
use crate::core::coordinate::Axis;

pub use templates::TrajectoryTemplate;

/// Deltas below this magnitude count as aligned.
pub const ALIGNED_LIMIT: f64 = 0.1;
/// Deltas at or above this magnitude count as major.
pub const MAJOR_LIMIT: f64 = 0.5;

/// Magnitude class of a single axis delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaBand {
    /// |δ| < 0.1
    Aligned,
    /// 0.1 <= |δ| < 0.5
    Notable,
    /// |δ| >= 0.5
    Major,
}

impl DeltaBand {
    /// Classify a signed delta by magnitude.
    pub fn classify(delta: f64) -> Self {
        let magnitude = delta.abs();
        if magnitude < ALIGNED_LIMIT {
            DeltaBand::Aligned
        } else if magnitude < MAJOR_LIMIT {
            DeltaBand::Notable
        } else {
            DeltaBand::Major
        }
    }
}

/// Delta on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDelta {
    /// Axis
    pub axis: Axis,
    /// `execution - intent`
    pub delta: f64,
    /// Magnitude class
    pub band: DeltaBand,
}

/// Dominant shift, or explicitly none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trajectory {
    /// No axis moved out of the aligned band, or the extremes are tied
    None,
    /// Intent over-promised `from`; execution exercises `to`
    Shift {
        /// Most negative delta
        from: Axis,
        /// Most positive delta
        to: Axis,
    },
    /// Execution exercises `to` without the name over-promising anything
    Toward {
        /// Most positive delta
        to: Axis,
    },
    /// The name promises `from` and the body falls short without a clear replacement
    Away {
        /// Most negative delta
        from: Axis,
    },
}

impl Trajectory {
    /// `"Wisdom → Power"`, `"none → Power"`, `"Wisdom → none"` or `"none"`.
    pub fn label(&self) -> String {
        match self {
            Trajectory::None => "none".to_string(),
            Trajectory::Shift { from, to } => format!("{from} → {to}"),
            Trajectory::Toward { to } => format!("none → {to}"),
            Trajectory::Away { from } => format!("{from} → none"),
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Explanation of one [`IceResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryReport {
    /// `[dl, dj, dp, dw]`
    pub deltas: [f64; 4],
    /// Band of each delta, in axis order
    pub bands: [DeltaBand; 4],
    /// Axis the name over-promised, `"none"` when nothing was over-promised
    #[serde(with = "axis_or_none")]
    pub from: Option<Axis>,
    /// Axis the body exercises, `"none"` when nothing clearly grew
    #[serde(with = "axis_or_none")]
    pub to: Option<Axis>,
    /// Rendered explanation
    pub interpretation: String,
    /// Suggested follow-ups
    pub recommendations: Vec<String>,
}

impl TrajectoryReport {
    /// The shift as an enum.
    pub fn trajectory(&self) -> Trajectory {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Trajectory::Shift { from, to },
            (None, Some(to)) => Trajectory::Toward { to },
            (Some(from), None) => Trajectory::Away { from },
            (None, None) => Trajectory::None,
        }
    }

    /// Deltas paired with their axes and bands.
    pub fn axis_deltas(&self) -> [AxisDelta; 4] {
        Axis::ALL.map(|axis| AxisDelta {
            axis,
            delta: self.deltas[axis.index()],
            band: self.bands[axis.index()],
        })
    }
}

/// Build the trajectory report for a scored pair.
pub fn explain(ice: &IceResult) -> TrajectoryReport {
    let intent = ice.intent.coordinate;
    let execution = ice.execution.coordinate;
    let deltas = Axis::ALL.map(|axis| execution[axis] - intent[axis]);
    let bands = deltas.map(DeltaBand::classify);

    let trajectory = dominant_shift(&deltas);
    let (from, to, interpretation, recommendations) = match trajectory {
        Trajectory::Shift { from, to } => match templates::template(from, to) {
            Some(template) => (
                Some(from),
                Some(to),
                format!(
                    "{} ({} {:+.2}, {} {:+.2})",
                    template.interpretation,
                    from,
                    deltas[from.index()],
                    to,
                    deltas[to.index()]
                ),
                to_owned(template.recommendations),
            ),
            None => aligned(),
        },
        Trajectory::Toward { to } => {
            let template = templates::toward(to);
            (
                None,
                Some(to),
                format!("{} ({} {:+.2})", template.interpretation, to, deltas[to.index()]),
                to_owned(template.recommendations),
            )
        }
        Trajectory::Away { from } => {
            let template = templates::away(from);
            (
                Some(from),
                None,
                format!("{} ({} {:+.2})", template.interpretation, from, deltas[from.index()]),
                to_owned(template.recommendations),
            )
        }
        Trajectory::None => aligned(),
    };

    TrajectoryReport {
        deltas,
        bands,
        from,
        to,
        interpretation,
        recommendations,
    }
}

fn aligned() -> (Option<Axis>, Option<Axis>, String, Vec<String>) {
    (
        None,
        None,
        templates::ALIGNED.interpretation.to_string(),
        to_owned(templates::ALIGNED.recommendations),
    )
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Most negative and most positive axes, each only when it leaves the
/// aligned band and is not tied with another axis.
fn dominant_shift(deltas: &[f64; 4]) -> Trajectory {
    let from = strict_extreme(deltas, -1.0);
    let to = strict_extreme(deltas, 1.0);
    match (from, to) {
        (Some(from), Some(to)) => Trajectory::Shift { from, to },
        (None, Some(to)) => Trajectory::Toward { to },
        (Some(from), None) => Trajectory::Away { from },
        (None, None) => Trajectory::None,
    }
}

fn strict_extreme(deltas: &[f64; 4], sign: f64) -> Option<Axis> {
    let signed = deltas.map(|delta| delta * sign);
    let best = Axis::ALL
        .into_iter()
        .max_by(|a, b| signed[a.index()].total_cmp(&signed[b.index()]))?;
    let peak = signed[best.index()];
    let tied = signed.iter().filter(|delta| **delta == peak).count() > 1;
    (peak >= ALIGNED_LIMIT && !tied).then_some(best)
}

mod axis_or_none {
    use serde::de::value::StrDeserializer;
    use serde::de::IntoDeserializer;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::core::coordinate::Axis;

    pub fn serialize<S: Serializer>(axis: &Option<Axis>, serializer: S) -> Result<S::Ok, S::Error> {
        match axis {
            Some(axis) => axis.serialize(serializer),
            None => serializer.serialize_str("none"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Axis>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "none" {
            return Ok(None);
        }
        let axis: StrDeserializer<'_, D::Error> = raw.as_str().into_deserializer();
        Axis::deserialize(axis).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resolver::SemanticResult;
    use crate::analysis::scoring::score;
    use crate::core::coordinate::Coordinate;

    fn semantic(components: [f64; 4]) -> SemanticResult {
        let coordinate = Coordinate::from_array(components).unwrap();
        SemanticResult {
            coordinate,
            concept_count: 1,
            clarity: 1.0 / (1.0 + coordinate.spread()),
        }
    }

    #[test]
    fn test_query_that_deletes_is_wisdom_to_power() {
        let ice = score(
            semantic([0.0, 0.05, 0.0, 0.95]),
            semantic([0.0, 0.05, 0.95, 0.0]),
        );
        let report = explain(&ice);
        assert_eq!(
            report.trajectory(),
            Trajectory::Shift {
                from: Axis::Wisdom,
                to: Axis::Power
            }
        );
        assert_eq!(report.trajectory().label(), "Wisdom → Power");
        assert_eq!(report.bands[Axis::Power.index()], DeltaBand::Major);
        assert_eq!(report.bands[Axis::Justice.index()], DeltaBand::Aligned);
        assert!(report.interpretation.contains("query"));
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_deltas_are_execution_minus_intent() {
        let intent = [0.2, 0.4, 0.1, 0.3];
        let execution = [0.5, 0.1, 0.3, 0.1];
        let report = explain(&score(semantic(intent), semantic(execution)));
        for i in 0..4 {
            assert!((report.deltas[i] - (execution[i] - intent[i])).abs() < 1e-12);
        }
        let deltas = report.axis_deltas();
        assert_eq!(deltas[0].axis, Axis::Love);
        assert_eq!(deltas[0].band, DeltaBand::Notable);
    }

    #[test]
    fn test_zero_distance_has_no_trajectory() {
        let same = semantic([0.3, 0.3, 0.2, 0.2]);
        let report = explain(&score(same, same));
        assert_eq!(report.trajectory(), Trajectory::None);
        assert_eq!(report.from, None);
        assert_eq!(report.interpretation, templates::ALIGNED.interpretation);
    }

    #[test]
    fn test_small_deltas_are_aligned() {
        let report = explain(&score(
            semantic([0.0, 0.525, 0.45, 0.025]),
            semantic([0.0, 0.5, 0.45, 0.05]),
        ));
        assert_eq!(report.trajectory(), Trajectory::None);
        assert!(report.bands.iter().all(|b| *b == DeltaBand::Aligned));
    }

    #[test]
    fn test_uniform_shift_has_no_dominant_pair() {
        let report = explain(&score(
            semantic([0.1, 0.1, 0.1, 0.1]),
            semantic([0.6, 0.6, 0.6, 0.6]),
        ));
        assert_eq!(report.trajectory(), Trajectory::None);
    }

    #[test]
    fn test_degenerate_intent_names_only_the_target() {
        let report = explain(&score(
            semantic([0.0, 0.0, 0.0, 0.0]),
            semantic([0.0, 0.05, 0.95, 0.0]),
        ));
        assert_eq!(report.from, None);
        assert_eq!(report.to, Some(Axis::Power));
        assert_eq!(report.trajectory(), Trajectory::Toward { to: Axis::Power });
        assert_eq!(report.trajectory().label(), "none → Power");
        assert!(report.interpretation.ends_with("(Power +0.95)"));
        assert!(!report.interpretation.contains("Love"));
    }

    #[test]
    fn test_unfulfilled_promise_names_only_the_source() {
        let report = explain(&score(
            semantic([0.0, 0.0, 0.0, 0.8]),
            semantic([0.0, 0.0, 0.0, 0.0]),
        ));
        assert_eq!(report.from, Some(Axis::Wisdom));
        assert_eq!(report.to, None);
        assert_eq!(report.trajectory().label(), "Wisdom → none");
        assert!(report.interpretation.ends_with("(Wisdom -0.80)"));
    }

    #[test]
    fn test_tied_extremes_are_not_picked() {
        let report = explain(&score(
            semantic([0.0, 0.0, 0.0, 0.0]),
            semantic([0.5, 0.0, 0.5, 0.0]),
        ));
        assert_eq!(report.trajectory(), Trajectory::None);
    }

    #[test]
    fn test_serializes_axes_and_none() {
        let shifted = explain(&score(
            semantic([0.0, 0.0, 0.0, 1.0]),
            semantic([0.0, 0.0, 1.0, 0.0]),
        ));
        let json = serde_json::to_value(&shifted).unwrap();
        assert_eq!(json["from"], "wisdom");
        assert_eq!(json["to"], "power");

        let same = semantic([0.5, 0.0, 0.0, 0.5]);
        let aligned = explain(&score(same, same));
        let json = serde_json::to_value(&aligned).unwrap();
        assert_eq!(json["from"], "none");
        assert_eq!(json["to"], "none");

        let back: TrajectoryReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, aligned);

        let one_sided = explain(&score(
            semantic([0.0, 0.0, 0.0, 0.0]),
            semantic([0.0, 0.0, 1.0, 0.0]),
        ));
        let json = serde_json::to_value(&one_sided).unwrap();
        assert_eq!(json["from"], "none");
        assert_eq!(json["to"], "power");
    }
}
