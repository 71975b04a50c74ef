//! The 4-axis semantic coordinate space.
//!
//! A [`Coordinate`] records relative emphasis on Love (connection and
//! communication), Justice (validation and rules), Power (action and
//! mutation) and Wisdom (information and analysis). Components are always
//! finite and non-negative; the fallible constructor is the only public way
//! to build one from arbitrary numbers.

use std::fmt;
use std::ops::{Add, Index};

use serde::{Deserialize, Serialize};

use crate::core::errors::{HarmonizerError, Result};

/// One of the four semantic axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Connection, communication, integration
    Love,
    /// Validation, rules, ordering
    Justice,
    /// Action, mutation, execution
    Power,
    /// Information, retrieval, analysis
    Wisdom,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 4] = [Axis::Love, Axis::Justice, Axis::Power, Axis::Wisdom];

    /// Component index of this axis.
    pub const fn index(self) -> usize {
        match self {
            Axis::Love => 0,
            Axis::Justice => 1,
            Axis::Power => 2,
            Axis::Wisdom => 3,
        }
    }

    /// Display name, capitalized.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Love => "Love",
            Axis::Justice => "Justice",
            Axis::Power => "Power",
            Axis::Wisdom => "Wisdom",
        }
    }

    /// Short description of what the axis measures.
    pub const fn meaning(self) -> &'static str {
        match self {
            Axis::Love => "connection and communication",
            Axis::Justice => "validation and rules",
            Axis::Power => "action and mutation",
            Axis::Wisdom => "information and analysis",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable point in the (L, J, P, W) space.
///
/// Serializes as a plain `[l, j, p, w]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", try_from = "[f64; 4]")]
pub struct Coordinate {
    components: [f64; 4],
}

impl Coordinate {
    /// The origin; returned for units where nothing resolved.
    pub const ZERO: Coordinate = Coordinate {
        components: [0.0; 4],
    };

    /// Build a coordinate, rejecting non-finite or negative components.
    pub fn new(love: f64, justice: f64, power: f64, wisdom: f64) -> Result<Self> {
        Self::from_array([love, justice, power, wisdom])
    }

    /// Build a coordinate from an `[l, j, p, w]` array.
    pub fn from_array(components: [f64; 4]) -> Result<Self> {
        for (axis, value) in Axis::ALL.iter().zip(components) {
            if !value.is_finite() {
                return Err(HarmonizerError::validation_field(
                    format!("{axis} component must be finite, got {value}"),
                    axis.name(),
                ));
            }
            if value < 0.0 {
                return Err(HarmonizerError::validation_field(
                    format!("{axis} component must be non-negative, got {value}"),
                    axis.name(),
                ));
            }
        }
        Ok(Self { components })
    }

    /// Build from trusted calibration tables.
    pub(crate) const fn from_table(components: [f64; 4]) -> Self {
        Self { components }
    }

    /// Love component
    pub fn love(&self) -> f64 {
        self.components[0]
    }

    /// Justice component
    pub fn justice(&self) -> f64 {
        self.components[1]
    }

    /// Power component
    pub fn power(&self) -> f64 {
        self.components[2]
    }

    /// Wisdom component
    pub fn wisdom(&self) -> f64 {
        self.components[3]
    }

    /// Components as an `[l, j, p, w]` array.
    pub fn as_array(&self) -> [f64; 4] {
        self.components
    }

    /// Whether every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|c| *c == 0.0)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Multiply every component by a non-negative finite factor.
    pub fn scale(&self, factor: f64) -> Coordinate {
        debug_assert!(factor.is_finite() && factor >= 0.0);
        let mut components = self.components;
        for c in &mut components {
            *c *= factor;
        }
        Coordinate { components }
    }

    /// Arithmetic mean of a set of coordinates, `None` when the set is empty.
    pub fn centroid<'a, I>(coordinates: I) -> Option<Coordinate>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut sum = Coordinate::ZERO;
        let mut count = 0usize;
        for coordinate in coordinates {
            sum = sum + *coordinate;
            count += 1;
        }
        (count > 0).then(|| sum.scale(1.0 / count as f64))
    }

    /// Euclidean distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity in `[-1, 1]`; `None` when either side has zero length.
    pub fn cosine_similarity(&self, other: &Coordinate) -> Option<f64> {
        let norms = self.magnitude() * other.magnitude();
        if norms == 0.0 {
            return None;
        }
        let dot: f64 = self
            .components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a * b)
            .sum();
        Some((dot / norms).clamp(-1.0, 1.0))
    }

    /// Population standard deviation across the four components.
    pub fn spread(&self) -> f64 {
        let mean = self.components.iter().sum::<f64>() / 4.0;
        let variance = self
            .components
            .iter()
            .map(|c| (c - mean) * (c - mean))
            .sum::<f64>()
            / 4.0;
        variance.sqrt()
    }

    /// Axis carrying the largest component; ties resolve in axis order.
    pub fn dominant_axis(&self) -> Option<Axis> {
        if self.is_zero() {
            return None;
        }
        let mut best = Axis::Love;
        for axis in Axis::ALL {
            if self[axis] > self[best] {
                best = axis;
            }
        }
        Some(best)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        let mut components = self.components;
        for (c, r) in components.iter_mut().zip(rhs.components) {
            *c += r;
        }
        Coordinate { components }
    }
}

impl Index<Axis> for Coordinate {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        &self.components[axis.index()]
    }
}

impl From<Coordinate> for [f64; 4] {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.components
    }
}

impl TryFrom<[f64; 4]> for Coordinate {
    type Error = HarmonizerError;

    fn try_from(components: [f64; 4]) -> Result<Self> {
        Coordinate::from_array(components)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(L={:.3}, J={:.3}, P={:.3}, W={:.3})",
            self.love(),
            self.justice(),
            self.power(),
            self.wisdom()
        )
    }
}
