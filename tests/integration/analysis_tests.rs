//! File and directory analysis: language detection, walking, aggregation.

use std::fs;

use tempfile::TempDir;

use cogscore::analysis::{analyze_file, analyze_path};
use cogscore::error::CogError;
use cogscore::score::ScoreConfig;

fn fixture(dir: &TempDir, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).expect("fixture write should succeed");
    path
}

#[test]
fn test_analyze_file_detects_language_from_extension() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "a.c", "int f(void) {\n    if (x) { if (y) {} }\n}\n");

    let result = analyze_file(&path, &ScoreConfig::default()).unwrap();
    assert_eq!(result.language, "c");
    assert_eq!(result.toplevel, 0);
    assert_eq!(result.complexity, 3);
    assert_eq!(result.functions.len(), 1);
    assert_eq!(result.functions[0].name, "f");
    assert_eq!(result.functions[0].complexity, 3);
}

#[test]
fn test_analyze_file_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "notes.txt", "if (x) {}");

    let result = analyze_file(&path, &ScoreConfig::default());
    assert!(matches!(result, Err(CogError::UnsupportedLanguage(_))));
}

#[test]
fn test_analyze_path_walks_registered_sources_only() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "a.c", "int f(void) {\n    if (x) { if (y) {} }\n}\n");
    fixture(&dir, "b.cpp", "void g() {\n    while (x) {}\n}\n");
    fixture(&dir, "notes.txt", "if (x) {}");

    let report = analyze_path(dir.path(), None, &ScoreConfig::default()).unwrap();
    assert_eq!(report.files.len(), 2);
    assert!(report.errors.is_empty());

    // Sorted by path: a.c before b.cpp.
    assert_eq!(report.files[0].language, "c");
    assert_eq!(report.files[0].complexity, 3);
    assert_eq!(report.files[1].language, "cpp");
    assert_eq!(report.files[1].complexity, 1);
}

#[test]
fn test_analyze_path_filters_by_language() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "a.c", "if (x) {}\n");
    fixture(&dir, "b.cpp", "if (x) {}\n");

    let report = analyze_path(dir.path(), Some("cpp"), &ScoreConfig::default()).unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].language, "cpp");
    assert_eq!(report.language.as_deref(), Some("cpp"));
}

#[test]
fn test_analyze_path_accepts_language_alias() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "b.cpp", "if (x) {}\n");

    let report = analyze_path(dir.path(), Some("c++"), &ScoreConfig::default()).unwrap();
    assert_eq!(report.files.len(), 1);
}

#[test]
fn test_analyze_path_missing_target_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let result = analyze_path(&missing, None, &ScoreConfig::default());
    assert!(matches!(result, Err(CogError::Io(_))));
}

#[test]
fn test_analyze_path_without_sources_is_an_error() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "notes.txt", "nothing to score");

    let result = analyze_path(dir.path(), None, &ScoreConfig::default());
    assert!(matches!(result, Err(CogError::InvalidArgument(_))));
}
