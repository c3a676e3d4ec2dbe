//! Line-pair matching into rectangles.
//!
//! Lines are normalized, bucketed by their shared Y and the Y levels are
//! compared pairwise in a triangular scan:
//!
//! ```text
//!   level 0  ──●────●──────●──     task 0: level 0 vs levels 1, 2, 3
//!   level 1  ──●────●─────────     task 1: level 1 vs levels 2, 3
//!   level 2  ───────●──────●──     task 2: level 2 vs level 3
//!   level 3  ──●────●──────●──     task 3: nothing left to compare
//! ```
//!
//! Two lines match when their left X and right X are both equal. Each task
//! collects its matches locally; the lists are merged in level order and
//! collapsed by dedup key once all tasks are done.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;

use super::Execution;
use crate::core::{Line, Rectangle, RectangleKey};

/// Normalized lines sharing one Y value.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLevel {
    /// Shared Y of every line in this level
    pub y: i64,
    /// Lines with the smaller-X endpoint first
    pub lines: Vec<Line>,
}

/// Normalize lines and bucket them by Y, levels sorted ascending.
///
/// Non-horizontal lines cannot be a rectangle side and are skipped.
pub fn bucket_lines(lines: &[Line]) -> Vec<LineLevel> {
    let mut by_y: BTreeMap<i64, Vec<Line>> = BTreeMap::new();
    let mut skipped = 0usize;

    for line in lines {
        if !line.is_horizontal() {
            skipped += 1;
            continue;
        }
        let normalized = line.normalized();
        by_y.entry(normalized.start().y).or_default().push(normalized);
    }

    if skipped > 0 {
        log::debug!("Skipped {} non-horizontal lines", skipped);
    }

    by_y.into_iter()
        .map(|(y, lines)| LineLevel { y, lines })
        .collect()
}

/// Compare level `index` against every later level.
fn scan_level(levels: &[LineLevel], index: usize) -> Vec<Rectangle> {
    let mut found = Vec::new();
    let lower = &levels[index];

    for upper in &levels[index + 1..] {
        for a in &lower.lines {
            for b in &upper.lines {
                if a.left_x() == b.left_x() && a.right_x() == b.right_x() {
                    found.push(Rectangle::new(*a, *b));
                }
            }
        }
    }

    found
}

/// Run the triangular scan, one task per level.
///
/// Returns one list per level, in level order.
pub fn find_matches(levels: &[LineLevel], execution: Execution) -> Vec<Vec<Rectangle>> {
    match execution {
        Execution::Parallel => (0..levels.len())
            .into_par_iter()
            .map(|index| scan_level(levels, index))
            .collect(),
        Execution::Sequential => (0..levels.len())
            .map(|index| scan_level(levels, index))
            .collect(),
    }
}

/// Merge per-level matches, collapsing rectangles with equal keys.
pub fn merge_matches(per_level: Vec<Vec<Rectangle>>) -> Vec<Rectangle> {
    let total: usize = per_level.iter().map(Vec::len).sum();
    let mut seen: HashSet<RectangleKey> = HashSet::with_capacity(total);
    let mut merged = Vec::with_capacity(total);

    for rect in per_level.into_iter().flatten() {
        if seen.insert(rect.key()) {
            merged.push(rect);
        }
    }

    merged
}

/// Match lines into rectangles.
pub fn match_rectangles(lines: &[Line], execution: Execution) -> Vec<Rectangle> {
    let levels = bucket_lines(lines);
    merge_matches(find_matches(&levels, execution))
}
