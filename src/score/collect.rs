//! Phase 1: tree traversal that classifies control-flow constructs.
//!
//! Walks the syntax tree once in pre-order, appending one scored entry per
//! construct and recording goto/label sites against the entry stream's
//! indices. Depth propagation differs per construct: only "body"-role
//! children deepen nesting, never headers or conditions. Resolution of the
//! recorded goto/label tables happens afterwards in [`super::resolve`].

use rustc_hash::FxHashMap;
use tree_sitter::Node;

use crate::score::model::{Location, Score, ScoreConfig, ScoreMap, Scores, UnnamedFunctionPolicy};

/// A `goto` occurrence: target label text plus the discovery index of the
/// goto's own entry in the score stream.
#[derive(Debug)]
pub(crate) struct GotoSite {
    pub label: String,
    pub index: usize,
}

/// A label marker: the stream index it would occupy plus the structural
/// depth at its point of occurrence.
///
/// A bare label is never a scored entry; the index exists purely as an
/// anchor for interval computation, and the depth only feeds the
/// structural-goto policy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LabelMark {
    pub index: usize,
    pub depth: u32,
}

/// Per-scope accumulator for phase 1.
///
/// One collector exists per scope (top level, or one function body); the
/// flat result map is threaded through so nested function definitions can
/// file their own buckets.
pub(crate) struct ScopeCollector<'a> {
    source: &'a [u8],
    config: &'a ScoreConfig,
    pub entries: Scores,
    pub gotos: Vec<GotoSite>,
    pub labels: FxHashMap<String, LabelMark>,
}

impl<'a> ScopeCollector<'a> {
    pub fn new(source: &'a [u8], config: &'a ScoreConfig) -> Self {
        Self {
            source,
            config,
            entries: Vec::new(),
            gotos: Vec::new(),
            labels: FxHashMap::default(),
        }
    }

    /// Get text from a node.
    fn node_text(&self, node: Node) -> &'a str {
        std::str::from_utf8(&self.source[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    /// Classify a node, then recurse into its children at the depth each
    /// child's role dictates.
    pub fn collect(&mut self, node: Node, depth: u32, out: &mut ScoreMap) {
        match node.kind() {
            "goto_statement" => {
                let label = node
                    .child_by_field_name("label")
                    .expect("goto_statement without label operand");
                self.gotos.push(GotoSite {
                    label: self.node_text(label).to_string(),
                    index: self.entries.len(),
                });
                self.entries.push((Location::of(&node), Score::flat(1)));
            }

            "labeled_statement" => {
                let label = node
                    .child_by_field_name("label")
                    .expect("labeled_statement without label");
                self.labels.insert(
                    self.node_text(label).to_string(),
                    LabelMark {
                        index: self.entries.len(),
                        depth,
                    },
                );
                self.collect_children(node, depth, out);
            }

            "if_statement" => {
                self.entries.push((Location::of(&node), Score::nested(1, depth)));
                let consequence = node.child_by_field_name("consequence").map(|n| n.id());
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    let deeper = Some(child.id()) == consequence;
                    self.collect(child, depth + u32::from(deeper), out);
                }
            }

            "else_clause" => {
                self.entries.push((Location::of(&node), Score::flat(1)));
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "if_statement" {
                        // "else if" chain: fold the inner if into this
                        // clause instead of opening a second nesting step.
                        self.collect_children(child, depth + 1, out);
                    } else {
                        self.collect(child, depth + 1, out);
                    }
                }
            }

            "switch_statement" => {
                self.entries.push((Location::of(&node), Score::nested(1, depth)));
                self.collect_children(node, depth + 1, out);
            }

            "for_statement" | "while_statement" | "do_statement" => {
                self.entries.push((Location::of(&node), Score::nested(1, depth)));
                let body = node.child_by_field_name("body").map(|n| n.id());
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    let deeper = Some(child.id()) == body;
                    self.collect(child, depth + u32::from(deeper), out);
                }
            }

            "catch_clause" => {
                self.entries.push((Location::of(&node), Score::nested(1, depth)));
                let body = node.child_by_field_name("body").map(|n| n.id());
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    let deeper = Some(child.id()) == body;
                    self.collect(child, depth + u32::from(deeper), out);
                }
            }

            "conditional_expression" => {
                self.entries.push((Location::of(&node), Score::nested(1, depth)));
                let consequence = node.child_by_field_name("consequence").map(|n| n.id());
                let alternative = node.child_by_field_name("alternative").map(|n| n.id());
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    let id = Some(child.id());
                    let deeper = id == consequence || id == alternative;
                    self.collect(child, depth + u32::from(deeper), out);
                }
            }

            "binary_expression" => self.collect_expression(node, None),

            "function_definition" => self.collect_function(node, depth, out),

            // Blocks, declarations, plain statements, other expressions:
            // no self score, children at unchanged depth.
            _ => self.collect_children(node, depth, out),
        }
    }

    /// Recurse into every child at the given depth.
    fn collect_children(&mut self, node: Node, depth: u32, out: &mut ScoreMap) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect(child, depth, out);
        }
    }

    /// Score runs of short-circuit operators inside a boolean expression.
    ///
    /// One entry per maximal contiguous run of the same operator: a new
    /// entry starts whenever the operator differs from the parent binary
    /// expression's operator, including across parentheses or negation
    /// (where the parent operator context resets to none). Non-logical
    /// binary expressions score nothing themselves but are still walked
    /// for logical sub-expressions.
    fn collect_expression(&mut self, node: Node, parent_operator: Option<&str>) {
        let mut operator: Option<&str> = None;
        if node.kind() == "binary_expression" {
            operator = node
                .child_by_field_name("operator")
                .map(|n| self.node_text(n));
            if matches!(operator, Some("&&" | "||")) && parent_operator != operator {
                self.entries.push((Location::of(&node), Score::flat(1)));
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_expression(child, operator);
        }
    }

    /// Open an independent sub-scope for a function definition.
    ///
    /// The body is scored by a fresh engine invocation (fresh depth, fresh
    /// goto/label tables) and filed flat under the function's name; the
    /// definition itself scores nothing.
    fn collect_function(&mut self, node: Node, depth: u32, out: &mut ScoreMap) {
        let body = node
            .child_by_field_name("body")
            .expect("function_definition without body");
        match self.function_name(node) {
            Some(name) => super::score_scope(body, self.source, self.config, out, Some(name)),
            None => match self.config.unnamed_functions {
                UnnamedFunctionPolicy::Merge => self.collect(body, depth, out),
                UnnamedFunctionPolicy::Drop => {}
            },
        }
    }

    /// Extract a function's identifier by walking the declarator chain to
    /// the innermost name.
    fn function_name(&self, node: Node) -> Option<String> {
        let mut declarator = node.child_by_field_name("declarator")?;
        loop {
            match declarator.kind() {
                "identifier"
                | "field_identifier"
                | "qualified_identifier"
                | "operator_name"
                | "destructor_name" => {
                    return Some(self.node_text(declarator).to_string());
                }
                _ => declarator = declarator.child_by_field_name("declarator")?,
            }
        }
    }
}
