//! Test utilities for Chaturbhuj.
//!
//! Point set generators and helpers for comparing results as sets.

#![allow(dead_code)]

use std::collections::BTreeSet;

use chaturbhuj::{Point, Rectangle};

/// Full grid over the given X and Y values.
pub fn grid(xs: &[i64], ys: &[i64]) -> Vec<Point> {
    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| Point::new(x, y)))
        .collect()
}

/// Full `n` x `m` grid with unit spacing starting at the origin.
pub fn unit_grid(n: i64, m: i64) -> Vec<Point> {
    let xs: Vec<i64> = (0..n).collect();
    let ys: Vec<i64> = (0..m).collect();
    grid(&xs, &ys)
}

/// Binomial coefficient C(n, 2).
pub fn choose2(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Rectangles as a set of canonical corner tuples.
pub fn corner_set(rects: &[Rectangle]) -> BTreeSet<[(i64, i64); 4]> {
    rects
        .iter()
        .map(|r| r.ordered_points().map(|p| (p.x, p.y)))
        .collect()
}

/// Scattered points with a few embedded rectangles and plenty of noise.
pub fn scattered(seed: u64, count: usize) -> Vec<Point> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(-6..6), rng.gen_range(-6..6)))
        .collect()
}

/// Count rectangles by brute force over all unique point quadruples' diagonals.
pub fn brute_force_count(points: &[Point]) -> usize {
    let unique: BTreeSet<(i64, i64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let unique: Vec<(i64, i64)> = unique.into_iter().collect();

    let mut count = 0;
    for (i, &(x1, y1)) in unique.iter().enumerate() {
        for &(x2, y2) in &unique[i + 1..] {
            // Count each rectangle once via its lower-left / upper-right diagonal
            if x1 < x2
                && y1 < y2
                && unique.binary_search(&(x1, y2)).is_ok()
                && unique.binary_search(&(x2, y1)).is_ok()
            {
                count += 1;
            }
        }
    }
    count
}
