//! Error types for Chaturbhuj

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Chaturbhuj error types
///
/// Detection itself never fails; these cover the file boundary, record
/// decoding and thread pool setup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Corners that do not form an axis-aligned rectangle
    #[error("Invalid rectangle: {0}")]
    InvalidRectangle(String),

    /// Dedicated worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}
