//! Integer point type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Integer coordinate in the input plane.
///
/// Serialized as `{"X": .., "Y": ..}`. Lowercase keys are accepted on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    #[serde(rename = "X", alias = "x")]
    pub x: i64,
    /// Y coordinate
    #[serde(rename = "Y", alias = "y")]
    pub y: i64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Point hash: `x XOR y`.
    ///
    /// This is the value folded into line and rectangle hashes.
    #[inline]
    pub fn hash_code(&self) -> i64 {
        self.x ^ self.y
    }

    /// Ordering by X, then Y (the canonical corner order).
    #[inline]
    pub fn cmp_xy(&self, other: &Point) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_xy(other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}
