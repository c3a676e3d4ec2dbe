//! Axis-aligned rectangle built from two matched horizontal lines.
//!
//! A [`Rectangle`] keeps the two lines it was discovered from and derives
//! everything else from its four corners sorted by X then Y:
//!
//! ```text
//!   p1 ─────────── p3      y2   (line2)
//!   │               │
//!   │               │
//!   p0 ─────────── p2      y1   (line1)
//!
//!   canonical order = [p0, p1, p2, p3]
//! ```
//!
//! Equality, hashing and serialization all go through that canonical order, so
//! a rectangle built from `(a, b)` is indistinguishable from one built from
//! `(b, a)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Line, Point};
use crate::error::Error;

/// Seed of the canonical polynomial hash.
pub const HASH_SEED: i64 = 19;
/// Multiplier of the canonical polynomial hash.
pub const HASH_FACTOR: i64 = 31;

/// Dedup key: the canonical corners of a rectangle.
///
/// Two rectangles have equal keys exactly when they cover the same corner set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectangleKey([Point; 4]);

/// Rectangle defined by two horizontal lines of equal X-span at different Y.
///
/// The constructor does not check that invariant; the matcher only pairs lines
/// that satisfy it. Use [`Rectangle::from_corners`] for unchecked input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "RectangleRecord", try_from = "RectangleRecord")]
pub struct Rectangle {
    line1: Line,
    line2: Line,
    ordered: [Point; 4],
    hash: i64,
    label: String,
}

impl Rectangle {
    /// Build a rectangle from two matched lines.
    ///
    /// Canonical corners, hash and label are computed here once.
    pub fn new(line1: Line, line2: Line) -> Self {
        let mut ordered = [line1.start(), line1.end(), line2.start(), line2.end()];
        ordered.sort_unstable_by(Point::cmp_xy);

        let hash = ordered.iter().fold(HASH_SEED, |h, p| {
            h.wrapping_mul(HASH_FACTOR).wrapping_add(p.hash_code())
        });
        let label = format!("[{},{}]", line1, line2);

        Self {
            line1,
            line2,
            ordered,
            hash,
            label,
        }
    }

    /// Build a rectangle from four corners in any order.
    ///
    /// Fails unless the corners form a non-degenerate axis-aligned rectangle.
    pub fn from_corners(corners: [Point; 4]) -> Result<Self, Error> {
        let mut p = corners;
        p.sort_unstable_by(Point::cmp_xy);

        let axis_aligned = p[0].x == p[1].x
            && p[2].x == p[3].x
            && p[0].y == p[2].y
            && p[1].y == p[3].y;
        if !axis_aligned {
            return Err(Error::InvalidRectangle(format!(
                "corners [({}), ({}), ({}), ({})] are not axis-aligned",
                p[0], p[1], p[2], p[3]
            )));
        }
        if p[0].x == p[2].x || p[0].y == p[1].y {
            return Err(Error::InvalidRectangle(format!(
                "corners [({}), ({}), ({}), ({})] are degenerate",
                p[0], p[1], p[2], p[3]
            )));
        }

        Ok(Self::new(Line::new(p[0], p[2]), Line::new(p[1], p[3])))
    }

    /// First defining line.
    #[inline]
    pub fn line1(&self) -> Line {
        self.line1
    }

    /// Second defining line.
    #[inline]
    pub fn line2(&self) -> Line {
        self.line2
    }

    /// The four corners sorted ascending by X, then Y.
    #[inline]
    pub fn ordered_points(&self) -> &[Point; 4] {
        &self.ordered
    }

    /// Canonical polynomial hash over the ordered corners.
    #[inline]
    pub fn hash_code(&self) -> i64 {
        self.hash
    }

    /// Textual form built from the two defining lines.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Dedup key for map-based collapsing.
    #[inline]
    pub fn key(&self) -> RectangleKey {
        RectangleKey(self.ordered)
    }

    /// Width along X.
    ///
    /// Unsigned, since corners may span the whole `i64` range.
    #[inline]
    pub fn width(&self) -> u64 {
        self.ordered[0].x.abs_diff(self.ordered[2].x)
    }

    /// Height along Y.
    #[inline]
    pub fn height(&self) -> u64 {
        self.ordered[0].y.abs_diff(self.ordered[1].y)
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.ordered
            .iter()
            .zip(other.ordered.iter())
            .all(|(a, b)| a.x == b.x && a.y == b.y)
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash);
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Persisted shape of a rectangle: four corners in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangleRecord {
    /// Lowest-X, lowest-Y corner
    pub point1: Point,
    /// Lowest-X, highest-Y corner
    pub point2: Point,
    /// Highest-X, lowest-Y corner
    pub point3: Point,
    /// Highest-X, highest-Y corner
    pub point4: Point,
}

impl From<&Rectangle> for RectangleRecord {
    fn from(rect: &Rectangle) -> Self {
        let [point1, point2, point3, point4] = *rect.ordered_points();
        Self {
            point1,
            point2,
            point3,
            point4,
        }
    }
}

impl From<Rectangle> for RectangleRecord {
    fn from(rect: Rectangle) -> Self {
        RectangleRecord::from(&rect)
    }
}

impl TryFrom<RectangleRecord> for Rectangle {
    type Error = Error;

    fn try_from(record: RectangleRecord) -> Result<Self, Self::Error> {
        Rectangle::from_corners([record.point1, record.point2, record.point3, record.point4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn line(x1: i64, x2: i64, y: i64) -> Line {
        Line::new(Point::new(x1, y), Point::new(x2, y))
    }

    #[test]
    fn test_rectangle_ordered_points() {
        let rect = Rectangle::new(line(3, 1, 5), line(1, 3, 2));

        assert_eq!(
            rect.ordered_points(),
            &[
                Point::new(1, 2),
                Point::new(1, 5),
                Point::new(3, 2),
                Point::new(3, 5)
            ]
        );
        assert_eq!(rect.width(), 2);
        assert_eq!(rect.height(), 3);
    }

    #[test]
    fn test_rectangle_extent_spans_full_range() {
        let wide = Rectangle::new(line(i64::MIN, i64::MAX, 0), line(i64::MIN, i64::MAX, 1));
        assert_eq!(wide.width(), u64::MAX);
        assert_eq!(wide.height(), 1);

        let tall = Rectangle::new(line(0, 1, i64::MIN), line(0, 1, i64::MAX));
        assert_eq!(tall.width(), 1);
        assert_eq!(tall.height(), u64::MAX);
    }

    #[test]
    fn test_rectangle_hash_formula() {
        let rect = Rectangle::new(line(0, 1, 0), line(0, 1, 1));

        // Corners (0,0) (0,1) (1,0) (1,1) hash to 0, 1, 1, 0
        let expected = ((19 * 31 + 0) * 31 + 1) * 31 * 31 + 31;
        assert_eq!(rect.hash_code(), expected);
    }

    #[test]
    fn test_rectangle_construction_order_invariance() {
        let a = line(0, 4, 0);
        let b = line(4, 0, 3);

        let ab = Rectangle::new(a, b);
        let ba = Rectangle::new(b, a);

        assert_eq!(ab, ba);
        assert_eq!(ab.hash_code(), ba.hash_code());
        assert_eq!(ab.key(), ba.key());

        let set: HashSet<Rectangle> = [ab, ba].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rectangle_inequality() {
        let r1 = Rectangle::new(line(0, 1, 0), line(0, 1, 1));
        let r2 = Rectangle::new(line(0, 2, 0), line(0, 2, 1));
        assert_ne!(r1, r2);
        assert_ne!(r1.key(), r2.key());
    }

    #[test]
    fn test_rectangle_ordered_points_stable() {
        let rect = Rectangle::new(line(5, -2, 7), line(-2, 5, -1));
        let first = *rect.ordered_points();
        for _ in 0..3 {
            assert_eq!(rect.ordered_points(), &first);
        }
    }

    #[test]
    fn test_rectangle_label() {
        let rect = Rectangle::new(line(0, 1, 0), line(0, 1, 1));
        assert_eq!(rect.as_str(), "[0, 0, 1, 0,0, 1, 1, 1]");
        assert_eq!(rect.to_string(), rect.as_str());
    }

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners([
            Point::new(2, 2),
            Point::new(0, 0),
            Point::new(0, 2),
            Point::new(2, 0),
        ])
        .unwrap();
        assert_eq!(rect, Rectangle::new(line(0, 2, 0), line(0, 2, 2)));
    }

    #[test]
    fn test_rectangle_from_corners_rejects_skewed() {
        let result = Rectangle::from_corners([
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 0),
            Point::new(3, 1),
        ]);
        assert!(matches!(result, Err(Error::InvalidRectangle(_))));
    }

    #[test]
    fn test_rectangle_from_corners_rejects_degenerate() {
        let result = Rectangle::from_corners([
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 0),
        ]);
        assert!(matches!(result, Err(Error::InvalidRectangle(_))));
    }

    #[test]
    fn test_rectangle_json_shape() {
        let rect = Rectangle::new(line(1, 0, 1), line(0, 1, 0));
        let value = serde_json::to_value(&rect).unwrap();

        assert_eq!(value["point1"]["X"], 0);
        assert_eq!(value["point1"]["Y"], 0);
        assert_eq!(value["point2"]["Y"], 1);
        assert_eq!(value["point3"]["X"], 1);
        assert_eq!(value["point4"]["X"], 1);
        assert_eq!(value["point4"]["Y"], 1);

        let back: Rectangle = serde_json::from_value(value).unwrap();
        assert_eq!(back, rect);
    }
}
