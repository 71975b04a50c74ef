//! Concept extraction from analysis units.
//!
//! Intent comes from the identifier and its documentation; execution comes
//! from walking the body's structural nodes. Neither side evaluates code.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenize::{split_identifier, tokenize_docs};
use crate::analysis::unit::{AnalysisUnit, NodeKind, StructuralNode};
use crate::lexicon::Concept;

/// Options for concept extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// Feed documentation tokens into intent after the name tokens
    pub include_docs: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self { include_docs: true }
    }
}

/// The two ordered concept lists of one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedConcepts {
    /// Name tokens followed by documentation tokens
    pub intent: Vec<Concept>,
    /// Structural concepts in pre-order
    pub execution: Vec<Concept>,
}

/// Turns analysis units into intent and execution concepts.
#[derive(Debug, Clone, Default)]
pub struct ConceptExtractor {
    options: ExtractionOptions,
}

impl ConceptExtractor {
    /// Create an extractor with the given options
    pub fn new(options: ExtractionOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Extract both concept lists.
    pub fn extract(&self, unit: &AnalysisUnit) -> ExtractedConcepts {
        ExtractedConcepts {
            intent: self.intent_concepts(unit),
            execution: self.execution_concepts(&unit.body),
        }
    }

    /// Identifier fragments, then documentation words, in order.
    pub fn intent_concepts(&self, unit: &AnalysisUnit) -> Vec<Concept> {
        let mut concepts: Vec<Concept> = split_identifier(&unit.name)
            .into_iter()
            .map(Concept::free)
            .collect();

        if self.options.include_docs {
            if let Some(docs) = unit.docs.as_deref() {
                concepts.extend(tokenize_docs(docs).into_iter().map(Concept::free));
            }
        }
        concepts
    }

    /// Pre-order walk over every node of the body.
    ///
    /// Each node contributes its kind's fixed concepts; calls also contribute
    /// the fragments of the called name, tagged with the call's receiver.
    pub fn execution_concepts(&self, body: &[StructuralNode]) -> Vec<Concept> {
        let mut concepts = Vec::new();
        let mut stack: Vec<&StructuralNode> = body.iter().rev().collect();

        while let Some(node) = stack.pop() {
            concepts.extend(kind_concepts(&node.kind).iter().map(|t| Concept::free(*t)));

            if let NodeKind::Call { name, receiver } = &node.kind {
                concepts.extend(
                    split_identifier(name)
                        .into_iter()
                        .map(|fragment| Concept::call(fragment, receiver.as_deref())),
                );
            }

            stack.extend(node.children.iter().rev());
        }
        concepts
    }
}

/// Fixed concepts emitted by each node kind.
///
/// Exhaustive on purpose: a new [`NodeKind`] does not compile until it is
/// given a mapping here.
pub fn kind_concepts(kind: &NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::Conditional => &["logic"],
        NodeKind::Loop => &["iterate"],
        NodeKind::Raise => &["raise"],
        NodeKind::Handler => &["recover"],
        NodeKind::Assignment => &["assign"],
        NodeKind::AugmentedAssignment => &["accumulate"],
        NodeKind::Call { .. } => &[],
        NodeKind::MembershipTest => &["check"],
        NodeKind::Comparison => &["compare"],
        NodeKind::ScopedResource => &["manage"],
        NodeKind::Import { .. } => &["import"],
        NodeKind::Deletion => &["delete"],
        NodeKind::Assertion => &["assert"],
        NodeKind::Return => &[],
        NodeKind::Yield => &["yield"],
        NodeKind::Await => &["await"],
        NodeKind::Comprehension => &["transform"],
        NodeKind::Lambda => &["transform"],
        NodeKind::GlobalDeclaration => &["share"],
        NodeKind::Jump => &[],
        NodeKind::Block => &[],
    }
}
