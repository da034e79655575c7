//! Per-line annotation rendering.
//!
//! Renders the source with an aligned ` // I N G` gutter: per line, the
//! increment, nesting value, and goto-nesting of every entry starting on
//! that line, `+`-joined when a line holds several.

use rustc_hash::FxHashMap;

use crate::score::{Entry, ScoreMap};

const GUTTER_PREFIX: &str = " // ";

/// Render an annotated listing of `source` with one gutter column group
/// per score component.
///
/// Entries from all scopes are merged and bucketed by their start row, in
/// location order.
pub fn annotate(source: &str, scopes: &ScoreMap) -> String {
    let mut entries: Vec<&Entry> = scopes.values().flatten().collect();
    entries.sort_by_key(|(location, _)| *location);

    let mut by_row: FxHashMap<usize, Vec<&Entry>> = FxHashMap::default();
    for entry in entries {
        by_row.entry(entry.0.start.row).or_default().push(entry);
    }

    let lines: Vec<&str> = source.lines().collect();
    let indent = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let column = |row: usize, component: fn(&Entry) -> u32| -> String {
        by_row
            .get(&row)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| component(entry).to_string())
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .unwrap_or_default()
    };

    let increments: Vec<String> = (0..lines.len())
        .map(|row| column(row, |(_, s)| s.increment))
        .collect();
    let nestings: Vec<String> = (0..lines.len())
        .map(|row| column(row, |(_, s)| s.nesting.map_or(0, |n| n.value)))
        .collect();
    let gotos: Vec<String> = (0..lines.len())
        .map(|row| column(row, |(_, s)| s.nesting.map_or(0, |n| n.goto)))
        .collect();

    let width = |cells: &[String]| cells.iter().map(String::len).max().unwrap_or(1);
    let (w_inc, w_nest, w_goto) = (width(&increments), width(&nestings), width(&gotos));

    let mut output = String::new();
    output.push_str(&format!(
        "{:indent$}{}{:^w_inc$} {:^w_nest$} {:^w_goto$}\n",
        "",
        " ".repeat(GUTTER_PREFIX.len()),
        "I",
        "N",
        "G",
    ));
    for (((line, inc), nest), goto) in lines
        .iter()
        .zip(&increments)
        .zip(&nestings)
        .zip(&gotos)
    {
        output.push_str(&format!(
            "{:<indent$}{}{:>w_inc$} {:>w_nest$} {:>w_goto$}\n",
            line, GUTTER_PREFIX, inc, nest, goto,
        ));
    }
    output
}
