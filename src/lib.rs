//! # Chaturbhuj
//!
//! Finds every distinct axis-aligned rectangle whose four corners are all
//! present in a set of integer points.
//!
//! ## Quick Start
//!
//! ```rust
//! use chaturbhuj::{Point, find_rectangles};
//!
//! let points = vec![
//!     Point::new(0, 0),
//!     Point::new(0, 1),
//!     Point::new(1, 0),
//!     Point::new(1, 1),
//!     Point::new(1, 1), // duplicates are ignored
//! ];
//!
//! let rectangles = find_rectangles(&points);
//! assert_eq!(rectangles.len(), 1);
//! assert_eq!(rectangles[0].ordered_points()[3], Point::new(1, 1));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!   Points ──► unique points ──► Y buckets ──► horizontal lines
//!                                                    │
//!                                                    ▼
//!   unique rectangles ◄── rectangle dedup ◄── line-pair matching
//! ```
//!
//! Line generation and matching run on rayon workers. Every other stage is
//! single-threaded. Results do not depend on input order or scheduling.
//!
//! ## Modules
//!
//! - [`core`]: Point, Line, Rectangle value types
//! - [`detection`]: pipeline stages and [`RectangleDetector`]
//! - [`config`]: YAML configuration
//! - [`io`]: JSON point input and rectangle export

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod io;

pub use config::{ChaturbhujConfig, ConfigLoadError, PrintMode};
pub use crate::core::{Line, Point, Rectangle, RectangleKey, RectangleRecord};
pub use detection::{
    DetectionConfig, DetectionResult, DetectionStats, Execution, RectangleDetector,
    TimingBreakdown, find_rectangles,
};
pub use error::{Error, Result};
