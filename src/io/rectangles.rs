//! Rectangle export as JSON records.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::core::{Rectangle, RectangleRecord};
use crate::error::Result;

/// Write rectangles as a pretty JSON array of records.
pub fn write_rectangles<W: Write>(writer: W, rects: &[Rectangle]) -> Result<()> {
    let records: Vec<RectangleRecord> = rects.iter().map(RectangleRecord::from).collect();
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

/// Save rectangles to a JSON file, creating parent directories as needed.
pub fn save_rectangles(path: &Path, rects: &[Rectangle]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_rectangles(&mut writer, rects)?;
    writer.flush()?;
    log::info!("Saved {} rectangles to {}", rects.len(), path.display());
    Ok(())
}

/// Decode a JSON array of rectangle records.
///
/// Records that are not axis-aligned rectangles are rejected.
pub fn read_rectangles<R: Read>(reader: R) -> Result<Vec<Rectangle>> {
    let rects: Vec<Rectangle> = serde_json::from_reader(reader)?;
    Ok(rects)
}

/// Load rectangles previously written by [`save_rectangles`].
pub fn load_rectangles(path: &Path) -> Result<Vec<Rectangle>> {
    read_rectangles(BufReader::new(File::open(path)?))
}
