//! File boundary: point input and rectangle export.
//!
//! Points are read from a JSON array of `{"X": int, "Y": int}` records.
//! Rectangles are written as records with four corner fields in canonical
//! order:
//!
//! ```json
//! [
//!   {
//!     "point1": { "X": 0, "Y": 0 },
//!     "point2": { "X": 0, "Y": 1 },
//!     "point3": { "X": 1, "Y": 0 },
//!     "point4": { "X": 1, "Y": 1 }
//!   }
//! ]
//! ```
//!
//! Decoding failures are reported here and never reach the detector.

mod points;
mod rectangles;

pub use points::{load_points, read_points};
pub use rectangles::{load_rectangles, read_rectangles, save_rectangles, write_rectangles};
