//! Input configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Input settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputSection {
    /// JSON file holding the point list
    #[serde(default = "defaults::points_path")]
    pub points_path: String,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            points_path: defaults::points_path(),
        }
    }
}
