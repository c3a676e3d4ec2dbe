//! Configuration loading errors.

use std::fmt;
use std::path::PathBuf;

/// Config load error
#[derive(Debug, Clone)]
pub enum ConfigLoadError {
    /// Config file could not be read
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
    /// YAML did not match the expected layout
    Parse(String),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Read { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            ConfigLoadError::Parse(msg) => write!(f, "invalid YAML: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
