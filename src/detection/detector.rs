//! Detection pipeline orchestration.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::Execution;
use super::dedup::{dedup_points, dedup_rectangles};
use super::grouping::group_by_y;
use super::lines::generate_lines;
use super::matcher::{bucket_lines, find_matches, merge_matches};
use crate::core::{Point, Rectangle};
use crate::error::Result;

/// Detection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Run line generation and matching on rayon workers.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker count for a dedicated pool (0 = shared global pool).
    #[serde(default)]
    pub num_threads: usize,
}

fn default_parallel() -> bool {
    true
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            num_threads: 0,
        }
    }
}

impl DetectionConfig {
    /// Sequential execution, no worker threads.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            num_threads: 0,
        }
    }

    /// Parallel execution on a dedicated pool of `num_threads` workers.
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            parallel: true,
            num_threads,
        }
    }

    /// Scheduling mode for the parallel stages.
    pub fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        }
    }
}

/// Stage timings for a single detection (all times in microseconds).
#[derive(Debug, Clone, Default)]
pub struct TimingBreakdown {
    /// Time spent collapsing duplicate points (µs).
    pub point_dedup_us: u64,
    /// Time spent grouping points by Y (µs).
    pub grouping_us: u64,
    /// Time spent generating lines (µs).
    pub line_generation_us: u64,
    /// Time spent matching lines into rectangles (µs).
    pub matching_us: u64,
    /// Time spent on the final rectangle dedup (µs).
    pub rect_dedup_us: u64,
    /// Total detection time (µs).
    pub total_us: u64,
}

/// Counts collected along the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionStats {
    /// Points given to the detector
    pub input_points: usize,
    /// Points left after dedup
    pub unique_points: usize,
    /// Distinct Y values among unique points
    pub y_levels: usize,
    /// Horizontal lines generated
    pub lines: usize,
    /// Line pairs that matched, before any dedup
    pub raw_matches: usize,
    /// Rectangles in the final result
    pub rectangles: usize,
}

/// Output of [`RectangleDetector::detect`].
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    /// Unique rectangles
    pub rectangles: Vec<Rectangle>,
    /// Stage counts
    pub stats: DetectionStats,
    /// Stage timings
    pub timing: TimingBreakdown,
}

/// Rectangle detector with configurable scheduling.
///
/// # Example
///
/// ```rust
/// use chaturbhuj::{DetectionConfig, Point, RectangleDetector};
///
/// let detector = RectangleDetector::new(DetectionConfig::default()).unwrap();
/// let points = [
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(1, 0),
///     Point::new(1, 1),
/// ];
/// let result = detector.detect(&points);
/// assert_eq!(result.rectangles.len(), 1);
/// ```
#[derive(Debug)]
pub struct RectangleDetector {
    config: DetectionConfig,
    pool: Option<rayon::ThreadPool>,
}

impl RectangleDetector {
    /// Create a detector, building a dedicated pool if `num_threads > 0`.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let pool = if config.parallel && config.num_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .thread_name(|i| format!("chaturbhuj-{}", i))
                .build()?;
            log::debug!("Built dedicated pool with {} workers", config.num_threads);
            Some(pool)
        } else {
            None
        };

        Ok(Self { config, pool })
    }

    /// Number of workers the parallel stages run on.
    pub fn worker_count(&self) -> usize {
        match (&self.pool, self.config.parallel) {
            (_, false) => 1,
            (Some(pool), true) => pool.current_num_threads(),
            (None, true) => rayon::current_num_threads(),
        }
    }

    /// Find every distinct axis-aligned rectangle with all four corners in `points`.
    pub fn detect(&self, points: &[Point]) -> DetectionResult {
        match &self.pool {
            Some(pool) => pool.install(|| self.run(points)),
            None => self.run(points),
        }
    }

    fn run(&self, points: &[Point]) -> DetectionResult {
        let execution = self.config.execution();
        let mut stats = DetectionStats {
            input_points: points.len(),
            ..Default::default()
        };
        let mut timing = TimingBreakdown::default();
        let start = Instant::now();

        let t = Instant::now();
        let unique = dedup_points(points);
        timing.point_dedup_us = t.elapsed().as_micros() as u64;
        stats.unique_points = unique.len();

        let t = Instant::now();
        let buckets = group_by_y(&unique);
        timing.grouping_us = t.elapsed().as_micros() as u64;
        stats.y_levels = buckets.len();

        log::debug!(
            "Points: {} input, {} unique, {} Y levels",
            stats.input_points,
            stats.unique_points,
            stats.y_levels
        );

        let t = Instant::now();
        let lines = generate_lines(&buckets, execution);
        timing.line_generation_us = t.elapsed().as_micros() as u64;
        stats.lines = lines.len();
        log::debug!(
            "Generated {} lines in {}µs",
            stats.lines,
            timing.line_generation_us
        );

        let t = Instant::now();
        let levels = bucket_lines(&lines);
        drop(lines);
        let per_level = find_matches(&levels, execution);
        stats.raw_matches = per_level.iter().map(Vec::len).sum();
        let matched = merge_matches(per_level);
        timing.matching_us = t.elapsed().as_micros() as u64;
        log::debug!(
            "Matched {} line pairs across {} levels in {}µs",
            stats.raw_matches,
            levels.len(),
            timing.matching_us
        );

        let t = Instant::now();
        let rectangles = dedup_rectangles(matched);
        timing.rect_dedup_us = t.elapsed().as_micros() as u64;
        stats.rectangles = rectangles.len();

        timing.total_us = start.elapsed().as_micros() as u64;
        log::info!(
            "Found {} rectangles from {} points in {}µs",
            stats.rectangles,
            stats.unique_points,
            timing.total_us
        );

        DetectionResult {
            rectangles,
            stats,
            timing,
        }
    }
}

/// Find every distinct axis-aligned rectangle with all four corners in `points`.
///
/// Duplicates in the input are ignored and empty input yields an empty result.
/// Runs the parallel stages on the global rayon pool.
pub fn find_rectangles(points: &[Point]) -> Vec<Rectangle> {
    let detector = RectangleDetector {
        config: DetectionConfig::default(),
        pool: None,
    };
    detector.run(points).rectangles
}
