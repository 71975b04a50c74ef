//! Analysis units and the closed structural grammar of their bodies.
//!
//! Parser adapters produce [`AnalysisUnit`]s; the core never looks at source
//! text. [`NodeKind`] is deliberately closed: the extractor matches on it
//! exhaustively, so a new kind cannot be added without deciding which
//! concepts it emits.

use serde::{Deserialize, Serialize};

/// Where a unit was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File the unit was found in
    pub file_path: String,
    /// 1-based line of the declaration
    pub line: usize,
    /// Enclosing class or module-level container, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

/// A named declaration to analyze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisUnit {
    /// Declared identifier
    pub name: String,
    /// Attached documentation text
    #[serde(default)]
    pub docs: Option<String>,
    /// Implementation body as structural nodes
    #[serde(default)]
    pub body: Vec<StructuralNode>,
    /// Declaration site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl AnalysisUnit {
    /// Unit with a name and body only.
    pub fn new(name: impl Into<String>, body: Vec<StructuralNode>) -> Self {
        Self {
            name: name.into(),
            docs: None,
            body,
            location: None,
        }
    }

    /// Attach documentation.
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Attach a declaration site.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// `Container.name` when the unit has a container.
    pub fn qualified_name(&self) -> String {
        match self.location.as_ref().and_then(|l| l.container.as_deref()) {
            Some(container) => format!("{container}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Total number of structural nodes in the body.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&StructuralNode> = self.body.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Kinds of structural node an adapter may emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// if / elif / match / ternary
    Conditional,
    /// for / while
    Loop,
    /// raise / throw
    Raise,
    /// except / catch clause
    Handler,
    /// `x = ...`
    Assignment,
    /// `x += ...`
    AugmentedAssignment,
    /// Function or method call
    Call {
        /// Called function or member name
        name: String,
        /// Receiver expression text for member calls
        #[serde(default)]
        receiver: Option<String>,
    },
    /// `x in xs`
    MembershipTest,
    /// `a < b`, `a == b`
    Comparison,
    /// `with` / `using` block
    ScopedResource,
    /// import / use
    Import {
        /// Imported module path
        module: String,
    },
    /// `del x`
    Deletion,
    /// `assert cond`
    Assertion,
    /// return statement
    Return,
    /// yield expression
    Yield,
    /// await expression
    Await,
    /// list/dict/set comprehension or generator
    Comprehension,
    /// anonymous function
    Lambda,
    /// global / nonlocal declaration
    GlobalDeclaration,
    /// pass / break / continue
    Jump,
    /// grouping node with no meaning of its own
    Block,
}

impl NodeKind {
    /// Stable snake_case label.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Conditional => "conditional",
            NodeKind::Loop => "loop",
            NodeKind::Raise => "raise",
            NodeKind::Handler => "handler",
            NodeKind::Assignment => "assignment",
            NodeKind::AugmentedAssignment => "augmented_assignment",
            NodeKind::Call { .. } => "call",
            NodeKind::MembershipTest => "membership_test",
            NodeKind::Comparison => "comparison",
            NodeKind::ScopedResource => "scoped_resource",
            NodeKind::Import { .. } => "import",
            NodeKind::Deletion => "deletion",
            NodeKind::Assertion => "assertion",
            NodeKind::Return => "return",
            NodeKind::Yield => "yield",
            NodeKind::Await => "await",
            NodeKind::Comprehension => "comprehension",
            NodeKind::Lambda => "lambda",
            NodeKind::GlobalDeclaration => "global_declaration",
            NodeKind::Jump => "jump",
            NodeKind::Block => "block",
        }
    }
}

/// One node of a unit body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuralNode {
    /// What the node is
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Nested nodes, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StructuralNode>,
}

impl StructuralNode {
    /// Leaf node.
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Node with children.
    pub fn with_children(kind: NodeKind, children: Vec<StructuralNode>) -> Self {
        Self { kind, children }
    }

    /// Bare call, e.g. `save(x)`.
    pub fn call(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Call {
            name: name.into(),
            receiver: None,
        })
    }

    /// Member call, e.g. `repo.save(x)`.
    pub fn method_call(receiver: impl Into<String>, name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Call {
            name: name.into(),
            receiver: Some(receiver.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_includes_descendants() {
        let unit = AnalysisUnit::new(
            "process",
            vec![StructuralNode::with_children(
                NodeKind::Loop,
                vec![
                    StructuralNode::call("handle"),
                    StructuralNode::with_children(
                        NodeKind::Conditional,
                        vec![StructuralNode::leaf(NodeKind::Jump)],
                    ),
                ],
            )],
        );
        assert_eq!(unit.node_count(), 4);
    }

    #[test]
    fn test_qualified_name_uses_container() {
        let unit = AnalysisUnit::new("save", vec![]).with_location(SourceLocation {
            file_path: "repo.py".to_string(),
            line: 10,
            container: Some("Repository".to_string()),
        });
        assert_eq!(unit.qualified_name(), "Repository.save");
    }

    #[test]
    fn test_nodes_deserialize_from_json() {
        let json = r#"[
            {"kind": "conditional", "children": [
                {"kind": "call", "name": "save", "receiver": "repo"}
            ]},
            {"kind": "return"}
        ]"#;
        let body: Vec<StructuralNode> = serde_json::from_str(json).unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].children[0], StructuralNode::method_call("repo", "save"));
        assert_eq!(body[1].kind, NodeKind::Return);
    }
}
