//! File- and directory-level complexity analysis.
//!
//! Thin collaborators around the scoring engine: parse bytes with the
//! registered grammar, score the tree, and aggregate per-function totals.
//! Directory analysis walks the tree with ignore-file awareness and scores
//! files in parallel; invocations share nothing, so no coordination is
//! needed.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CogError, Result};
use crate::lang::LanguageRegistry;
use crate::score::{score_tree, ScoreConfig, ScoreMap};

/// Complexity total for a single named function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSummary {
    /// Function name as written in the declarator
    pub name: String,
    /// Sum of entry totals in the function's bucket
    pub complexity: u32,
}

/// Aggregated totals for one scored tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSummary {
    /// Complexity of code outside any function
    pub toplevel: u32,
    /// Whole-tree complexity (top level plus all functions)
    pub total: u32,
    /// Per-function totals, sorted by name
    pub functions: Vec<FunctionSummary>,
}

/// Cognitive complexity result for a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileComplexity {
    /// File path that was scored
    pub path: PathBuf,
    /// Language the file was parsed as
    pub language: String,
    /// Whole-file complexity
    pub complexity: u32,
    /// Complexity of code outside any function
    pub toplevel: u32,
    /// Per-function totals, sorted by name
    pub functions: Vec<FunctionSummary>,
}

/// Error during analysis of one file; recorded, not fatal to the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisError {
    /// File path where the error occurred
    pub file: PathBuf,
    /// Error message describing the failure
    pub message: String,
}

/// Complete analysis result for a file or directory tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Path that was analyzed
    pub path: PathBuf,
    /// Language filter applied, if any
    pub language: Option<String>,
    /// Per-file results, sorted by path
    pub files: Vec<FileComplexity>,
    /// Per-file analysis errors
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<AnalysisError>,
}

/// Parse and score a source buffer for a named language.
pub fn score_source(source: &[u8], language: &str, config: &ScoreConfig) -> Result<ScoreMap> {
    let lang = LanguageRegistry::global()
        .get_by_name(language)
        .ok_or_else(|| CogError::UnsupportedLanguage(language.to_string()))?;

    let mut parser = lang.parser()?;
    let tree = parser.parse(source, None).ok_or_else(|| CogError::Parse {
        file: format!("<{}>", lang.name()),
        message: "parser returned no tree".to_string(),
    })?;

    Ok(score_tree(&tree, source, config))
}

/// Sum entry totals per bucket of a scored tree.
pub fn summarize(scopes: &ScoreMap) -> ScopeSummary {
    let mut toplevel = 0;
    let mut functions = Vec::new();
    for (name, scores) in scopes {
        let complexity: u32 = scores.iter().map(|(_, score)| score.total()).sum();
        match name {
            Some(name) => functions.push(FunctionSummary {
                name: name.clone(),
                complexity,
            }),
            None => toplevel = complexity,
        }
    }
    functions.sort_by(|a, b| a.name.cmp(&b.name));

    let total = toplevel + functions.iter().map(|f| f.complexity).sum::<u32>();
    ScopeSummary {
        toplevel,
        total,
        functions,
    }
}

/// Analyze cognitive complexity for a single file.
///
/// The language is detected from the file extension.
pub fn analyze_file(file: impl AsRef<Path>, config: &ScoreConfig) -> Result<FileComplexity> {
    let file = file.as_ref();

    let lang = LanguageRegistry::global()
        .detect_language(file)
        .ok_or_else(|| CogError::UnsupportedLanguage(file.display().to_string()))?;

    let source = std::fs::read(file).map_err(|e| CogError::io_with_path(e, file))?;
    let scopes = score_source(&source, lang.name(), config)?;
    let summary = summarize(&scopes);

    Ok(FileComplexity {
        path: file.to_path_buf(),
        language: lang.name().to_string(),
        complexity: summary.total,
        toplevel: summary.toplevel,
        functions: summary.functions,
    })
}

/// Analyze cognitive complexity for a file or directory tree.
///
/// Directories are walked with ignore-file awareness; files whose
/// extension maps to a registered language (optionally narrowed by
/// `language`) are scored in parallel. Per-file failures are recorded in
/// the report rather than aborting the run.
pub fn analyze_path(
    path: impl AsRef<Path>,
    language: Option<&str>,
    config: &ScoreConfig,
) -> Result<ComplexityReport> {
    let path = path.as_ref();
    let registry = LanguageRegistry::global();

    let filter = match language {
        Some(name) => Some(
            registry
                .get_by_name(name)
                .ok_or_else(|| CogError::UnsupportedLanguage(name.to_string()))?
                .name(),
        ),
        None => None,
    };

    if !path.exists() {
        return Err(CogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Path not found: {}", path.display()),
        )));
    }

    let files: Vec<PathBuf> = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        WalkBuilder::new(path)
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.into_path())
            .filter(|p| match registry.detect_language(p) {
                Some(lang) => filter.is_none_or(|name| name == lang.name()),
                None => false,
            })
            .collect()
    };

    if files.is_empty() {
        return Err(CogError::InvalidArgument(format!(
            "No source files found in {} (filter: {:?})",
            path.display(),
            language
        )));
    }

    debug!("Scoring {} files for cognitive complexity", files.len());

    let results: Vec<std::result::Result<FileComplexity, AnalysisError>> = files
        .par_iter()
        .map(|file| {
            analyze_file(file, config).map_err(|e| AnalysisError {
                file: file.clone(),
                message: e.to_string(),
            })
        })
        .collect();

    let mut analyzed = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(file) => analyzed.push(file),
            Err(error) => errors.push(error),
        }
    }
    analyzed.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(ComplexityReport {
        path: path.to_path_buf(),
        language: language.map(String::from),
        files: analyzed,
        errors,
    })
}
