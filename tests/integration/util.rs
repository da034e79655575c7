//! Shared helpers for scoring tests.
//!
//! Expected entries are written as `(start, end, increment, nesting)`
//! tuples mirroring how the engine reports them; comparisons sort both
//! sides by location first, since consumers treat an entry stream as a
//! multiset keyed by location.

use cogscore::analysis::score_source;
use cogscore::score::{Entry, Location, Nesting, Position, Score, ScoreConfig, ScoreMap};

pub fn scores(source: &str, language: &str) -> ScoreMap {
    scores_with(source, language, &ScoreConfig::default())
}

pub fn scores_with(source: &str, language: &str, config: &ScoreConfig) -> ScoreMap {
    score_source(source.as_bytes(), language, config).expect("source should parse")
}

pub fn entry(
    start: (usize, usize),
    end: (usize, usize),
    increment: u32,
    nesting: Option<Nesting>,
) -> Entry {
    (
        Location {
            start: Position {
                row: start.0,
                column: start.1,
            },
            end: Position {
                row: end.0,
                column: end.1,
            },
        },
        Score { increment, nesting },
    )
}

/// Nesting with both components spelled out.
pub fn nested(value: u32, goto: u32) -> Option<Nesting> {
    Some(Nesting { value, goto })
}

/// A flat score's absent nesting.
pub fn flat() -> Option<Nesting> {
    None
}

fn sort_key(entry: &Entry) -> (Location, u32, Option<(u32, u32)>) {
    let (location, score) = entry;
    (
        *location,
        score.increment,
        score.nesting.map(|n| (n.value, n.goto)),
    )
}

pub fn assert_scope(scopes: &ScoreMap, name: Option<&str>, expected: &[Entry]) {
    let actual = scopes
        .get(&name.map(String::from))
        .unwrap_or_else(|| panic!("missing scope {:?}", name));

    let mut actual = actual.clone();
    let mut expected = expected.to_vec();
    actual.sort_by_key(sort_key);
    expected.sort_by_key(sort_key);
    assert_eq!(actual, expected, "scope {:?}", name);
}

pub fn assert_toplevel(scopes: &ScoreMap, expected: &[Entry]) {
    assert_scope(scopes, None, expected);
}
