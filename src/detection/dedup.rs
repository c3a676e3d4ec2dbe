//! Point and rectangle deduplication.

use std::collections::HashSet;

use crate::core::{Point, Rectangle, RectangleKey};

/// Collapse repeated points, keeping the first occurrence of each.
///
/// Structural equality only; coordinates are not normalized.
pub fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

/// Keep the first rectangle seen per dedup key, in encounter order.
///
/// Idempotent, and correct for any input: reruns, concatenated results of
/// several matchers, or rectangles built from the same lines in either order.
pub fn dedup_rectangles<I>(rects: I) -> Vec<Rectangle>
where
    I: IntoIterator<Item = Rectangle>,
{
    let rects = rects.into_iter();
    let mut seen: HashSet<RectangleKey> = HashSet::with_capacity(rects.size_hint().0);
    rects.filter(|rect| seen.insert(rect.key())).collect()
}
