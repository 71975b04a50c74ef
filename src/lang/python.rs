//! Python language adapter with tree-sitter integration.
//!
//! Turns Python source into [`AnalysisUnit`]s: one unit per function or
//! method, its docstring as documentation and its body mapped onto the
//! structural grammar. Syntax the grammar has no kind for is walked through
//! transparently and counted in [`AdapterStats`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::analysis::unit::{AnalysisUnit, NodeKind, SourceLocation, StructuralNode};
use crate::core::errors::{HarmonizerError, Result};


/// Adapter counters for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterStats {
    /// Function and method definitions found
    pub functions: usize,
    /// Structural nodes emitted across all units
    pub nodes: usize,
    /// tree-sitter kinds with no structural mapping, walked through transparently
    pub unrecognized: BTreeMap<String, usize>,
    /// Whether tree-sitter reported syntax errors
    pub has_syntax_errors: bool,
}

impl AdapterStats {
    /// Total unrecognized nodes skipped
    pub fn total_unrecognized(&self) -> usize {
        self.unrecognized.values().sum()
    }

    /// Fold another file's counters into this one
    pub fn absorb(&mut self, other: &AdapterStats) {
        self.functions += other.functions;
        self.nodes += other.nodes;
        self.has_syntax_errors |= other.has_syntax_errors;
        for (kind, count) in &other.unrecognized {
            *self.unrecognized.entry(kind.clone()).or_insert(0) += count;
        }
    }
}

/// Units extracted from one source file.
#[derive(Debug, Clone, Default)]
pub struct AdapterOutput {
    /// One unit per function or method, in source order
    pub units: Vec<AnalysisUnit>,
    /// Counters
    pub stats: AdapterStats,
}

/// How a tree-sitter kind maps onto the structural grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    /// Fixed structural kind
    Emit(NodeKind),
    /// Call expression, needs the callee
    Call,
    /// Comparison, membership if an `in` operator is present
    Comparison,
    /// Import statement, needs the module path
    Import,
    /// Nested definition, analyzed as its own unit
    Nested,
    /// Syntax without meaning of its own; children are walked
    Transparent,
    /// Kind this adapter does not know
    Unknown,
}

fn classify(kind: &str) -> Shape {
    match kind {
        "if_statement" | "elif_clause" | "conditional_expression" | "match_statement" => {
            Shape::Emit(NodeKind::Conditional)
        }
        "for_statement" | "while_statement" => Shape::Emit(NodeKind::Loop),
        "raise_statement" => Shape::Emit(NodeKind::Raise),
        "except_clause" | "except_group_clause" => Shape::Emit(NodeKind::Handler),
        "assignment" | "named_expression" => Shape::Emit(NodeKind::Assignment),
        "augmented_assignment" => Shape::Emit(NodeKind::AugmentedAssignment),
        "with_statement" => Shape::Emit(NodeKind::ScopedResource),
        "delete_statement" => Shape::Emit(NodeKind::Deletion),
        "assert_statement" => Shape::Emit(NodeKind::Assertion),
        "return_statement" => Shape::Emit(NodeKind::Return),
        "yield" => Shape::Emit(NodeKind::Yield),
        "await" => Shape::Emit(NodeKind::Await),
        "list_comprehension" | "dictionary_comprehension" | "set_comprehension"
        | "generator_expression" => Shape::Emit(NodeKind::Comprehension),
        "lambda" => Shape::Emit(NodeKind::Lambda),
        "global_statement" | "nonlocal_statement" => Shape::Emit(NodeKind::GlobalDeclaration),
        "pass_statement" | "break_statement" | "continue_statement" => {
            Shape::Emit(NodeKind::Jump)
        }
        "call" => Shape::Call,
        "comparison_operator" => Shape::Comparison,
        "import_statement" | "import_from_statement" | "future_import_statement" => {
            Shape::Import
        }
        "function_definition" | "class_definition" | "decorated_definition" => Shape::Nested,
        "block" | "expression_statement" | "try_statement" | "finally_clause" | "else_clause"
        | "case_clause" | "case_pattern" | "with_clause" | "with_item" | "as_pattern"
        | "as_pattern_target" | "for_in_clause" | "if_clause" | "parenthesized_expression"
        | "argument_list" | "keyword_argument" | "binary_operator" | "boolean_operator"
        | "not_operator" | "unary_operator" | "attribute" | "subscript" | "slice"
        | "identifier" | "string" | "string_start" | "string_content" | "string_end"
        | "escape_sequence" | "concatenated_string" | "interpolation" | "format_specifier"
        | "integer" | "float" | "true" | "false" | "none" | "ellipsis" | "list"
        | "dictionary" | "set" | "tuple" | "pair" | "expression_list" | "pattern_list"
        | "tuple_pattern" | "list_pattern" | "list_splat" | "dictionary_splat"
        | "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_identifier"
        | "dotted_name" | "aliased_import" | "lambda_parameters" | "type" | "comment"
        | "line_continuation" | "ERROR" => Shape::Transparent,
        _ => Shape::Unknown,
    }
}

/// Maximum syntax nesting walked inside one function body.
const MAX_DEPTH: usize = 256;

/// Python adapter over tree-sitter.
pub struct PythonAdapter {
    parser: Parser,
}

impl PythonAdapter {
    /// Create a new Python adapter
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language).map_err(|e| {
            HarmonizerError::parse("python", format!("Failed to set Python language: {:?}", e))
        })?;

        Ok(Self { parser })
    }

    /// Parse Python source code into analysis units
    pub fn parse_source(&mut self, source_code: &str, file_path: &str) -> Result<AdapterOutput> {
        let tree = self.parser.parse(source_code, None).ok_or_else(|| {
            HarmonizerError::parse_with_file(
                "python",
                "Failed to parse Python source code",
                file_path,
            )
        })?;

        let root = tree.root_node();
        let mut output = AdapterOutput::default();
        output.stats.has_syntax_errors = root.has_error();
        if root.has_error() {
            debug!("{} contains syntax errors; analyzing what parsed", file_path);
        }

        // (node, enclosing definition names)
        let mut stack: Vec<(Node, Vec<String>)> = vec![(root, Vec::new())];
        let mut found: Vec<(usize, AnalysisUnit)> = Vec::new();

        while let Some((node, scope)) = stack.pop() {
            let mut child_scope = scope.clone();
            match node.kind() {
                "function_definition" => {
                    let unit = self.function_unit(
                        node,
                        source_code,
                        file_path,
                        &scope,
                        &mut output.stats,
                    )?;
                    child_scope.push(unit.name.clone());
                    found.push((node.start_byte(), unit));
                }
                "class_definition" => {
                    if let Some(name) = node.child_by_field_name("name") {
                        child_scope.push(name.utf8_text(source_code.as_bytes())?.to_string());
                    }
                }
                _ => {}
            }

            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                stack.push((child, child_scope.clone()));
            }
        }

        found.sort_by_key(|(start, _)| *start);
        output.units = found.into_iter().map(|(_, unit)| unit).collect();
        output.stats.functions = output.units.len();
        Ok(output)
    }

    fn function_unit(
        &self,
        node: Node,
        source_code: &str,
        file_path: &str,
        scope: &[String],
        stats: &mut AdapterStats,
    ) -> Result<AnalysisUnit> {
        let name = node
            .child_by_field_name("name")
            .ok_or_else(|| {
                HarmonizerError::parse_with_file("python", "function without a name", file_path)
            })?
            .utf8_text(source_code.as_bytes())?
            .to_string();

        let mut docs = None;
        let mut body = Vec::new();
        if let Some(block) = node.child_by_field_name("body") {
            let mut cursor = block.walk();
            let statements: Vec<Node> = block.named_children(&mut cursor).collect();
            let mut rest = statements.as_slice();
            if let Some((first, tail)) = statements.split_first() {
                if let Some(text) = docstring(*first, source_code)? {
                    docs = Some(text);
                    rest = tail;
                }
            }
            for statement in rest {
                self.map_node(*statement, source_code, 0, stats, &mut body)?;
            }
        }

        let container = (!scope.is_empty()).then(|| scope.join("."));
        let location = SourceLocation {
            file_path: file_path.to_string(),
            line: node.start_position().row + 1,
            container,
        };

        Ok(AnalysisUnit {
            name,
            docs,
            body,
            location: Some(location),
        })
    }

    /// Map one syntax node, appending structural nodes to `out`.
    fn map_node(
        &self,
        node: Node,
        source_code: &str,
        depth: usize,
        stats: &mut AdapterStats,
        out: &mut Vec<StructuralNode>,
    ) -> Result<()> {
        if depth >= MAX_DEPTH {
            *stats.unrecognized.entry("depth_limit".to_string()).or_insert(0) += 1;
            return Ok(());
        }

        let kind = match classify(node.kind()) {
            Shape::Nested => return Ok(()),
            Shape::Transparent => {
                return self.map_children(node, source_code, depth, stats, out);
            }
            Shape::Unknown => {
                *stats.unrecognized.entry(node.kind().to_string()).or_insert(0) += 1;
                debug!("Unmapped python node kind '{}'", node.kind());
                return self.map_children(node, source_code, depth, stats, out);
            }
            Shape::Emit(kind) => kind,
            Shape::Comparison => {
                let mut cursor = node.walk();
                let membership = node
                    .children(&mut cursor)
                    .any(|child| matches!(child.kind(), "in" | "not in"));
                if membership {
                    NodeKind::MembershipTest
                } else {
                    NodeKind::Comparison
                }
            }
            Shape::Import => NodeKind::Import {
                module: import_module(node, source_code)?,
            },
            Shape::Call => match callee(node, source_code)? {
                Some((name, receiver)) => NodeKind::Call { name, receiver },
                None => return self.map_children(node, source_code, depth, stats, out),
            },
        };

        let mut children = Vec::new();
        self.map_children(node, source_code, depth, stats, &mut children)?;
        stats.nodes += 1;
        out.push(StructuralNode::with_children(kind, children));
        Ok(())
    }

    fn map_children(
        &self,
        node: Node,
        source_code: &str,
        depth: usize,
        stats: &mut AdapterStats,
        out: &mut Vec<StructuralNode>,
    ) -> Result<()> {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.map_node(child, source_code, depth + 1, stats, out)?;
        }
        Ok(())
    }
}

/// `(name, receiver)` of a call; `None` when the callee is not a plain name or member.
fn callee(node: Node, source_code: &str) -> Result<Option<(String, Option<String>)>> {
    let Some(function) = node.child_by_field_name("function") else {
        return Ok(None);
    };
    match function.kind() {
        "identifier" => Ok(Some((
            function.utf8_text(source_code.as_bytes())?.to_string(),
            None,
        ))),
        "attribute" => {
            let name = function
                .child_by_field_name("attribute")
                .map(|n| n.utf8_text(source_code.as_bytes()))
                .transpose()?;
            let receiver = function
                .child_by_field_name("object")
                .map(|n| n.utf8_text(source_code.as_bytes()))
                .transpose()?
                .map(|text| text.split_whitespace().collect::<String>());
            Ok(name.map(|name| (name.to_string(), receiver)))
        }
        _ => Ok(None),
    }
}

fn import_module(node: Node, source_code: &str) -> Result<String> {
    if node.kind() == "future_import_statement" {
        return Ok("__future__".to_string());
    }
    let target = node
        .child_by_field_name("module_name")
        .or_else(|| node.child_by_field_name("name"));
    let module = match target {
        Some(target) if target.kind() == "aliased_import" => target
            .child_by_field_name("name")
            .map(|n| n.utf8_text(source_code.as_bytes()))
            .transpose()?
            .unwrap_or_default(),
        Some(target) => target.utf8_text(source_code.as_bytes())?,
        None => "",
    };
    Ok(module.to_string())
}

/// Text of a leading string-literal statement.
fn docstring(statement: Node, source_code: &str) -> Result<Option<String>> {
    if statement.kind() != "expression_statement" || statement.named_child_count() != 1 {
        return Ok(None);
    }
    match statement.named_child(0) {
        Some(literal) if literal.kind() == "string" => {
            let raw = literal.utf8_text(source_code.as_bytes())?;
            Ok(Some(strip_string_literal(raw).to_string()))
        }
        _ => Ok(None),
    }
}

fn strip_string_literal(raw: &str) -> &str {
    let unprefixed = raw.trim_start_matches(|c: char| "rRbBuUfF".contains(c));
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if let Some(inner) = unprefixed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    unprefixed.trim()
}
