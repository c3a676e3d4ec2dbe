//! Point list loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::Point;
use crate::error::Result;

/// Decode a JSON array of point records.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>> {
    let points: Vec<Point> = serde_json::from_reader(reader)?;
    Ok(points)
}

/// Load a JSON array of point records from a file.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let file = File::open(path)?;
    let points = read_points(BufReader::new(file))?;
    log::debug!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
