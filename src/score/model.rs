//! Value types threaded through the scoring engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A row/column position in the source, zero-based (tree-sitter convention).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

/// Source span of a scored construct.
///
/// Totally ordered (start first, then end) so entry streams can be sorted
/// deterministically. Ordering is for presentation only; it is not an
/// identity — several constructs may share a span start.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    /// The span covered by a tree-sitter node.
    pub(crate) fn of(node: &Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start: Position {
                row: start.row,
                column: start.column,
            },
            end: Position {
                row: end.row,
                column: end.column,
            },
        }
    }
}

/// Structural and jump-induced nesting attributed to one scored entry.
///
/// `value` is the structural nesting depth at the construct's point of
/// occurrence. `goto` counts the goto/label spans covering the entry,
/// filled in by the resolver after traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nesting {
    pub value: u32,
    pub goto: u32,
}

impl Nesting {
    /// Nesting at a given structural depth, with no goto contribution yet.
    pub fn at_depth(value: u32) -> Self {
        Self { value, goto: 0 }
    }
}

/// Cost of a single control-flow construct.
///
/// `nesting` is absent for constructs that cost a flat increment
/// regardless of depth: gotos, logical-operator runs, and else markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub increment: u32,
    pub nesting: Option<Nesting>,
}

impl Score {
    /// A depth-independent score.
    pub fn flat(increment: u32) -> Self {
        Self {
            increment,
            nesting: None,
        }
    }

    /// A score carrying the structural depth at its point of occurrence.
    pub fn nested(increment: u32, depth: u32) -> Self {
        Self {
            increment,
            nesting: Some(Nesting::at_depth(depth)),
        }
    }

    /// Total cost: increment plus nesting penalties when present.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.increment + self.nesting.map_or(0, |n| n.value + n.goto)
    }
}

/// One scored construct: where it is and what it costs.
pub type Entry = (Location, Score);

/// Pre-order stream of scored constructs for one scope.
pub type Scores = Vec<Entry>;

/// Flat per-function result map; `None` keys the top-level scope.
///
/// Buckets are independent: goto/label resolution never crosses from one
/// function into another or into the enclosing scope.
pub type ScoreMap = FxHashMap<Option<String>, Scores>;

/// What to do with the body of a function whose name cannot be extracted
/// from its declarator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnnamedFunctionPolicy {
    /// Score the body inline as part of the enclosing scope. Totals are
    /// never lost, at the cost of sharing the enclosing goto/label tables.
    #[default]
    Merge,
    /// Skip the body entirely.
    Drop,
}

/// Configuration for the scoring engine and its goto/label resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Penalize entries lying between a goto and its target label
    /// (`Nesting::goto` accumulation). Enabled by default.
    pub goto_nesting: bool,
    /// Score each resolved goto as if it occurred at its target label's
    /// nesting instead of a flat increment. Disabled by default.
    pub structural_gotos: bool,
    /// Fallback for functions with no extractable name.
    pub unnamed_functions: UnnamedFunctionPolicy,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            goto_nesting: true,
            structural_gotos: false,
            unnamed_functions: UnnamedFunctionPolicy::default(),
        }
    }
}
