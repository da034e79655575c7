//! Nesting-aware cognitive complexity scoring for C/C++.
//!
//! cogscore walks a tree-sitter syntax tree and assigns every control-flow
//! construct a cost that grows with structural nesting depth and with the
//! reach of unstructured jumps. Unlike plain construct counting, deeply
//! nested code and code jumped over by `goto` both get more expensive —
//! matching how hard the code actually is to follow.
//!
//! The result is a flat map from function name (or `None` for top-level
//! code) to an ordered stream of `(Location, Score)` entries; consumers
//! sum entry totals for per-function scores or bucket entries by line for
//! annotated listings.
//!
//! # Example
//!
//! ```ignore
//! use cogscore::{analyze_file, ScoreConfig};
//!
//! let result = analyze_file("src/scheduler.c", &ScoreConfig::default())?;
//! println!("{}: {}", result.path.display(), result.complexity);
//! for func in &result.functions {
//!     println!("  {}: {}", func.name, func.complexity);
//! }
//! ```

pub mod analysis;
pub mod annotate;
pub mod error;
pub mod lang;
pub mod score;

// Re-export primary types for convenience
pub use analysis::{
    analyze_file, analyze_path, score_source, summarize, AnalysisError, ComplexityReport,
    FileComplexity, FunctionSummary, ScopeSummary,
};
pub use annotate::annotate;
pub use error::{CogError, Result};
pub use lang::{Language, LanguageRegistry};
pub use score::{
    score_tree, Entry, Location, Nesting, Position, Score, ScoreConfig, ScoreMap, Scores,
    UnnamedFunctionPolicy,
};
