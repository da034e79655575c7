//! Scope partitioning: per-function buckets and goto isolation.

use cogscore::score::{ScoreConfig, UnnamedFunctionPolicy};

use crate::util::{assert_scope, assert_toplevel, entry, flat, nested, scores, scores_with};

#[test]
fn test_single_toplevel_if() {
    let scopes = scores("if (x) {}\n", "c");
    assert_toplevel(&scopes, &[entry((0, 0), (0, 9), 1, nested(0, 0))]);
}

#[test]
fn test_functions_score_into_separate_buckets() {
    let source = "\
int f0(void) {
    if (x) {}
}
int f1(void) {
    if (x) {}
}
if (x) {}
";
    let scopes = scores(source, "c");
    assert_scope(&scopes, Some("f0"), &[entry((1, 4), (1, 13), 1, nested(0, 0))]);
    assert_scope(&scopes, Some("f1"), &[entry((4, 4), (4, 13), 1, nested(0, 0))]);
    assert_toplevel(&scopes, &[entry((6, 0), (6, 9), 1, nested(0, 0))]);
}

#[test]
fn test_empty_functions_get_empty_buckets() {
    let source = "\
int f0(void) {
}
int f1(void) {
}
";
    let scopes = scores(source, "c");
    assert_scope(&scopes, Some("f0"), &[]);
    assert_scope(&scopes, Some("f1"), &[]);
    assert_toplevel(&scopes, &[]);
}

#[test]
fn test_goto_resolution_is_scoped_per_function() {
    // Both functions use the label name L; neither span leaks into the
    // other's bucket, and both spans are empty within their own.
    let source = "\
int f0(void) {
L:;
    goto L;
    if (x) {}
}
int f1(void) {
    if (x) {}
    goto L;
L:;
}
";
    let scopes = scores(source, "c");
    assert_scope(
        &scopes,
        Some("f0"),
        &[
            entry((2, 4), (2, 11), 1, flat()),
            entry((3, 4), (3, 13), 1, nested(0, 0)),
        ],
    );
    assert_scope(
        &scopes,
        Some("f1"),
        &[
            entry((6, 4), (6, 13), 1, nested(0, 0)),
            entry((7, 4), (7, 11), 1, flat()),
        ],
    );
    assert_toplevel(&scopes, &[]);
}

#[test]
fn test_goto_never_resolves_across_scopes() {
    // The target label lives outside the function, so the goto keeps its
    // flat score and nothing is penalized.
    let source = "\
int f(void) {
    if (x)
        goto out;
}
out:;
";
    let scopes = scores(source, "c");
    assert_scope(
        &scopes,
        Some("f"),
        &[
            entry((1, 4), (2, 17), 1, nested(0, 0)),
            entry((2, 8), (2, 17), 1, flat()),
        ],
    );
    assert_toplevel(&scopes, &[]);
}

#[test]
fn test_nested_function_files_its_own_flat_key() {
    // GNU-style nested function: the inner body is an independent scope
    // at fresh depth, keyed beside the outer function, not inside it.
    let source = "\
int outer(void) {
    if (x) {}
    int inner(void) {
        if (y) {}
    }
}
";
    let scopes = scores(source, "c");
    assert_scope(&scopes, Some("outer"), &[entry((1, 4), (1, 13), 1, nested(0, 0))]);
    assert_scope(&scopes, Some("inner"), &[entry((3, 8), (3, 17), 1, nested(0, 0))]);
    assert_toplevel(&scopes, &[]);
}

// A function returning a function pointer: the declarator chain bottoms
// out in a parenthesized declarator, so no name can be extracted.
const UNNAMED: &str = "\
void (*handler(int sig))(int) {
    if (x) {}
}
";

#[test]
fn test_unnamed_function_body_merges_into_enclosing_scope() {
    let scopes = scores(UNNAMED, "c");
    assert_eq!(scopes.len(), 1, "no bucket is opened for the function");
    assert_toplevel(&scopes, &[entry((1, 4), (1, 13), 1, nested(0, 0))]);
}

#[test]
fn test_unnamed_function_body_can_be_dropped() {
    let config = ScoreConfig {
        unnamed_functions: UnnamedFunctionPolicy::Drop,
        ..ScoreConfig::default()
    };
    let scopes = scores_with(UNNAMED, "c", &config);
    assert_eq!(scopes.len(), 1, "no bucket is opened for the function");
    assert_toplevel(&scopes, &[]);
}

#[test]
fn test_qualified_method_name_is_extracted() {
    let source = "\
void Widget::resize() {
    if (x) {}
}
";
    let scopes = scores(source, "cpp");
    assert_scope(
        &scopes,
        Some("Widget::resize"),
        &[entry((1, 4), (1, 13), 1, nested(0, 0))],
    );
}

#[test]
fn test_scoring_is_deterministic() {
    let source = "\
int f(void) {
L:;
    while (x) {
        if (y)
            goto L;
    }
}
if (a && b || c) {}
";
    let first = scores_with(source, "c", &ScoreConfig::default());
    let second = scores_with(source, "c", &ScoreConfig::default());
    assert_eq!(first, second);
}
