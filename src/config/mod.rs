//! Configuration loading for Chaturbhuj.
//!
//! Loads settings from a single YAML file with sensible defaults. When no path
//! is given, a missing `configs/config.yaml` means defaults. A file named
//! explicitly must exist, and a present but malformed file is always an error.
//!
//! ## Example YAML
//!
//! ```yaml
//! input:
//!   points_path: data_points_16.json
//!
//! detection:
//!   parallel: true
//!   num_threads: 0        # 0 = shared rayon pool
//!
//! output:
//!   json_path: output/rectangles.json
//!   print: ask            # ask | always | never
//! ```

mod chaturbhuj;
mod defaults;
mod error;
mod input;
mod output;

pub use chaturbhuj::ChaturbhujConfig;
pub use error::ConfigLoadError;
pub use input::InputSection;
pub use output::{OutputSection, PrintMode};
