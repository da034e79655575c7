//! Cognitive complexity scoring over a parsed syntax tree.
//!
//! The engine walks a tree-sitter tree once per scope and produces, for
//! the top level and for each function, an ordered stream of
//! `(Location, Score)` entries — one per control-flow construct, weighted
//! by structural nesting depth and by the reach of unstructured jumps.
//!
//! # Scoring rules
//!
//! - `if`, `switch`, loops, `catch`, and ternaries add 1 plus their
//!   nesting depth; only body-role children deepen nesting, never headers
//!   or conditions.
//! - `else` markers, `goto` statements, and runs of the same short-circuit
//!   operator add a flat 1.
//! - An "else if" chain folds into the else clause instead of opening a
//!   second nesting step, so chains do not accumulate pyramid-style.
//! - Code lying between a `goto` and its target label receives an extra
//!   penalty per covering span ([`ScoreConfig::goto_nesting`]); a goto can
//!   instead or additionally inherit its target's nesting context
//!   ([`ScoreConfig::structural_gotos`]).
//! - Each function body is an independent scope with its own goto/label
//!   resolution; the result map is flat, keyed by function name, with
//!   `None` holding everything outside any function.
//!
//! # Example
//!
//! ```ignore
//! use cogscore::lang::LanguageRegistry;
//! use cogscore::score::{score_tree, ScoreConfig};
//!
//! let source = b"if (x) { while (y) {} }";
//! let lang = LanguageRegistry::global().get_by_name("c").unwrap();
//! let tree = lang.parser()?.parse(source, None).unwrap();
//!
//! let scopes = score_tree(&tree, source, &ScoreConfig::default());
//! let toplevel: u32 = scopes[&None].iter().map(|(_, s)| s.total()).sum();
//! assert_eq!(toplevel, 3); // if:1, while:1+1 nesting
//! ```

mod collect;
mod model;
mod resolve;

pub use model::{
    Entry, Location, Nesting, Position, Score, ScoreConfig, ScoreMap, Scores,
    UnnamedFunctionPolicy,
};

use tree_sitter::{Node, Tree};

use collect::ScopeCollector;

/// Score a whole parsed tree.
///
/// Returns the flat per-function map described in the module docs. The
/// computation is pure: no state survives an invocation, and scoring the
/// same tree twice yields identical results.
pub fn score_tree(tree: &Tree, source: &[u8], config: &ScoreConfig) -> ScoreMap {
    let mut scopes = ScoreMap::default();
    score_scope(tree.root_node(), source, config, &mut scopes, None);
    scopes
}

/// Run both phases over one scope and file the result under `key`.
///
/// Nested function definitions encountered during the walk recurse back
/// through here with their own key, so every scope owns fresh goto/label
/// tables and a fresh depth.
pub(crate) fn score_scope(
    node: Node,
    source: &[u8],
    config: &ScoreConfig,
    out: &mut ScoreMap,
    key: Option<String>,
) {
    let mut collector = ScopeCollector::new(source, config);
    collector.collect(node, 0, out);

    let ScopeCollector {
        entries,
        gotos,
        labels,
        ..
    } = collector;
    let scores = resolve::resolve(entries, &gotos, &labels, config);
    out.insert(key, scores);
}
