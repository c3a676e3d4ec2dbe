//! Y-level bucketing of unique points.

use std::collections::BTreeMap;

use crate::core::Point;

/// Points grouped by Y, each bucket sorted ascending by X.
pub type YBuckets = BTreeMap<i64, Vec<Point>>;

/// Partition unique points into Y buckets sorted left to right.
///
/// Line generation and matching both rely on the left-to-right order within a
/// bucket.
pub fn group_by_y(points: &[Point]) -> YBuckets {
    let mut buckets = YBuckets::new();
    for &point in points {
        buckets.entry(point.y).or_default().push(point);
    }
    for row in buckets.values_mut() {
        row.sort_unstable_by_key(|p| p.x);
    }
    buckets
}
