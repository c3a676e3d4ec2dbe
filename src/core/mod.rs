//! Geometric value types.
//!
//! - [`Point`]: integer coordinate pair
//! - [`Line`]: unordered segment between two points
//! - [`Rectangle`]: axis-aligned rectangle with cached canonical corners
//! - [`RectangleKey`]: dedup key derived from canonical corners
//! - [`RectangleRecord`]: serialized rectangle shape

mod line;
mod point;
mod rectangle;

pub use line::Line;
pub use point::Point;
pub use rectangle::{HASH_FACTOR, HASH_SEED, Rectangle, RectangleKey, RectangleRecord};
