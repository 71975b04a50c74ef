//! # Harmonizer-RS: Intent vs. Execution Analysis
//!
//! Flags functions whose name says one thing while their body does another.
//! Both sides are projected onto a shared 4-axis semantic space and the
//! distance between them is scored:
//!
//! - **Love**: connection and communication
//! - **Justice**: validation and rules
//! - **Power**: action and mutation
//! - **Wisdom**: information and analysis
//!
//! A function called `get_user` whose body deletes a row sits far apart on
//! the Wisdom and Power axes and is reported as critical, with a trajectory
//! explaining the shift and name suggestions closer to what the body does.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         API Layer                            │
//! │               HarmonyEngine · AnalysisReport                 │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Analysis          │  Lexicon         │  Naming   │  Lang     │
//! │ • Extractor        │ • Builder/merge  │ • Verbs   │ • Python  │
//! │ • Resolver (memo)  │ • Context rules  │ • Cosine  │  (tree-   │
//! │ • Scoring/Severity │ • Phrases        │   ranking │  sitter)  │
//! │ • Trajectory       │                  │           │           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harmonizer_rs::{AnalysisUnit, HarmonyEngine, StructuralNode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = HarmonyEngine::with_defaults()?;
//!     let unit = AnalysisUnit::new(
//!         "get_user",
//!         vec![StructuralNode::method_call("db", "delete")],
//!     );
//!
//!     let report = engine.analyze(&unit);
//!     println!("{}: {:.2} ({})", report.name, report.distance, report.severity);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "mimalloc")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

// Core types shared by every layer
pub mod core {
    //! Coordinates, configuration and errors.

    pub mod config;
    pub mod coordinate;
    pub mod errors;
}

// Token -> coordinate table
pub mod lexicon;

// Concept extraction, resolution and scoring
pub mod analysis {
    //! Concept extraction, coordinate resolution, scoring and explanation.

    pub mod extractor;
    pub mod resolver;
    pub mod scoring;
    pub mod tokenize;
    pub mod trajectory;
    pub mod unit;
}

// Verb table and name synthesis
pub mod naming;

// Language-specific AST adapters
pub mod lang {
    //! Source-to-structure adapters.

    pub mod python;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use analysis::resolver::SemanticResult;
pub use analysis::scoring::{IceResult, Severity};
pub use analysis::trajectory::{Trajectory, TrajectoryReport};
pub use analysis::unit::{AnalysisUnit, NodeKind, SourceLocation, StructuralNode};
pub use api::engine::HarmonyEngine;
pub use api::results::{AnalysisReport, AnalysisSummary, ExitStatus, UnitReport};
pub use core::config::HarmonizerConfig;
pub use core::coordinate::{Axis, Coordinate};
pub use core::errors::{HarmonizerError, Result, ResultExt};
pub use lang::python::PythonAdapter;
pub use lexicon::{Lexicon, LexiconBuilder, LexiconOverride, OverrideDocument};
pub use naming::{NamingRecommender, NamingSuggestion};
