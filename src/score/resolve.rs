//! Phase 2: goto/label resolution.
//!
//! Turns the goto/label tables recorded during traversal into nesting
//! adjustments. Each resolved goto/label pair defines a span over the
//! entry stream; coverage is accumulated with a difference array and a
//! single prefix-sum pass per scope, so overlapping pairs add up without
//! re-scanning the stream per pair.
//!
//! Span orientation matters. With a forward goto (goto before label) the
//! covered range is `[goto + 1, label)`: neither the goto's own entry nor
//! anything before it is penalized. With a backward goto the covered range
//! is `[label, goto)`: the entry at the label's index is the first entry
//! after the jump target, so it is included.

use rustc_hash::FxHashMap;

use crate::score::collect::{GotoSite, LabelMark};
use crate::score::model::{Nesting, ScoreConfig, Scores};

/// Apply the configured goto policies to a finished scope.
///
/// Consumes phase 1's entry stream and returns the final one; entries are
/// never mutated in place across phases. A goto whose label was never
/// recorded in this scope contributes nothing and keeps its original
/// score.
pub(crate) fn resolve(
    mut entries: Scores,
    gotos: &[GotoSite],
    labels: &FxHashMap<String, LabelMark>,
    config: &ScoreConfig,
) -> Scores {
    if gotos.is_empty() {
        return entries;
    }

    let pairs: Vec<(usize, LabelMark)> = gotos
        .iter()
        .filter_map(|site| labels.get(&site.label).map(|mark| (site.index, *mark)))
        .collect();
    if pairs.is_empty() {
        return entries;
    }

    let n = entries.len();

    // Coverage of entry indices, one +1 per span containing the entry.
    let mut cover = vec![0i64; n + 1];
    if config.goto_nesting {
        for &(goto, mark) in &pairs {
            let (start, stop) = if goto < mark.index {
                (goto + 1, mark.index)
            } else {
                (mark.index, goto)
            };
            if start < stop {
                cover[start] += 1;
                cover[stop] -= 1;
            }
        }
        for i in 1..=n {
            cover[i] += cover[i - 1];
        }
    }

    // Coverage of label markers. A marker at index m sits between entries
    // m-1 and m; a span strictly contains it when goto < m < label
    // (forward) or label < m <= goto (backward). Only the structural
    // policy reads these values.
    let mut marker_cover = vec![0i64; n + 2];
    if config.goto_nesting && config.structural_gotos {
        for &(goto, mark) in &pairs {
            let (start, stop) = if goto < mark.index {
                (goto + 1, mark.index)
            } else {
                (mark.index + 1, goto + 1)
            };
            if start < stop {
                marker_cover[start] += 1;
                marker_cover[stop] -= 1;
            }
        }
        for i in 1..=n + 1 {
            marker_cover[i] += marker_cover[i - 1];
        }
    }

    // A resolved goto inherits its target label's nesting context.
    let mut inherited: FxHashMap<usize, Nesting> = FxHashMap::default();
    if config.structural_gotos {
        for &(goto, mark) in &pairs {
            inherited.insert(
                goto,
                Nesting {
                    value: mark.depth,
                    goto: marker_cover[mark.index] as u32,
                },
            );
        }
    }

    for (index, (_, score)) in entries.iter_mut().enumerate() {
        if let Some(nesting) = inherited.get(&index) {
            score.nesting = Some(*nesting);
        } else if config.goto_nesting {
            if let Some(nesting) = score.nesting.as_mut() {
                nesting.goto += cover[index] as u32;
            }
        }
    }

    entries
}
