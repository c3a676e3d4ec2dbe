//! Rectangle detection pipeline.
//!
//! ```text
//!   points ──► dedup_points ──► group_by_y ──► generate_lines ──┐
//!                                              (task per row)   │
//!                                                               ▼
//!   rectangles ◄── dedup_rectangles ◄── merge_matches ◄── find_matches
//!                                                       (task per Y level)
//! ```
//!
//! The two parallel stages each end with a join barrier; no stage starts
//! before the previous one has finished. Tasks never share mutable state:
//! each returns a local list and merging happens on the calling thread in
//! task index order, so results are deterministic for a given input.

pub mod dedup;
pub mod detector;
pub mod grouping;
pub mod lines;
pub mod matcher;

pub use dedup::{dedup_points, dedup_rectangles};
pub use detector::{
    DetectionConfig, DetectionResult, DetectionStats, RectangleDetector, TimingBreakdown,
    find_rectangles,
};
pub use grouping::{YBuckets, group_by_y};
pub use lines::{generate_lines, row_lines};
pub use matcher::{LineLevel, bucket_lines, find_matches, match_rectangles, merge_matches};

/// Scheduling of the line generation and matching stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// One rayon task per bucket / level on the current pool.
    #[default]
    Parallel,
    /// Plain loop on the calling thread.
    Sequential,
}
