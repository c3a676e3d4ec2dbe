//! Output configuration section.

use serde::{Deserialize, Serialize};

/// When to list rectangles on the console
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// Prompt `(y/n)` on stdin
    #[default]
    Ask,
    /// Always print
    Always,
    /// Never print
    Never,
}

/// Output settings section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    /// Write rectangles as JSON records to this file (disabled when unset)
    #[serde(default)]
    pub json_path: Option<String>,

    /// Console listing mode
    #[serde(default)]
    pub print: PrintMode,
}
