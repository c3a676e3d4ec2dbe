//! Line segment between two points.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Point;

/// Unordered segment between two distinct points.
///
/// Equality and hashing ignore endpoint order. Lines are transient: the
/// generator produces them and the matcher consumes them.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    /// Create a line from two endpoints (kept in the given order).
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert!(start != end, "line endpoints must differ");
        Self { start, end }
    }

    /// First endpoint as stored.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint as stored.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Same line with the smaller-X endpoint first.
    ///
    /// Ties on X fall back to Y so the result is defined for vertical lines too.
    #[inline]
    pub fn normalized(&self) -> Self {
        if self.start.cmp_xy(&self.end).is_le() {
            *self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Whether both endpoints share a Y coordinate.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Smaller X of the two endpoints.
    #[inline]
    pub fn left_x(&self) -> i64 {
        self.start.x.min(self.end.x)
    }

    /// Larger X of the two endpoints.
    #[inline]
    pub fn right_x(&self) -> i64 {
        self.start.x.max(self.end.x)
    }

    /// Order-independent hash: `hash(start) XOR hash(end)`.
    #[inline]
    pub fn hash_code(&self) -> i64 {
        self.start.hash_code() ^ self.end.hash_code()
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.start, self.end)
    }
}
