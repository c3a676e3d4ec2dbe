//! Main ChaturbhujConfig and loading methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use super::input::InputSection;
use super::output::OutputSection;
use crate::detection::DetectionConfig;

/// Full Chaturbhuj configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ChaturbhujConfig {
    /// Input settings
    #[serde(default)]
    pub input: InputSection,

    /// Detection scheduling
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,
}

impl ChaturbhujConfig {
    /// Load configuration from a YAML file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Using config: {}", path.display());
        Ok(config)
    }

    /// Load `configs/config.yaml`, or built-in defaults when it is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        Self::load_or_default(Path::new(defaults::config_path()))
    }

    fn load_or_default(path: &Path) -> Result<Self, ConfigLoadError> {
        if !path.is_file() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the detection config
    pub fn detection_config(&self) -> DetectionConfig {
        self.detection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrintMode;

    #[test]
    fn test_default_config() {
        let config = ChaturbhujConfig::default();
        assert_eq!(config.input.points_path, "data_points_16.json");
        assert!(config.detection.parallel);
        assert_eq!(config.detection.num_threads, 0);
        assert_eq!(config.output.json_path, None);
        assert_eq!(config.output.print, PrintMode::Ask);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ChaturbhujConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = ChaturbhujConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.input.points_path, config.input.points_path);
        assert_eq!(parsed.detection.parallel, config.detection.parallel);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "detection:\n  num_threads: 4\noutput:\n  print: never\n";
        let config = ChaturbhujConfig::from_yaml(yaml).unwrap();

        assert!(config.detection.parallel);
        assert_eq!(config.detection.num_threads, 4);
        assert_eq!(config.output.print, PrintMode::Never);
        assert_eq!(config.input.points_path, "data_points_16.json");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ChaturbhujConfig::from_yaml("output:\n  print: sometimes\n");
        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ChaturbhujConfig::load(Path::new("does/not/exist.yaml"));
        match result {
            Err(ConfigLoadError::Read { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.yaml"))
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_default_file_falls_back() {
        let config = ChaturbhujConfig::load_or_default(Path::new("does/not/exist.yaml")).unwrap();
        assert_eq!(config.input.points_path, "data_points_16.json");
        assert!(config.detection.parallel);
    }

    #[test]
    fn test_load_default_reads_bundled_file() {
        // Tests run from the package root, where configs/config.yaml ships
        let config = ChaturbhujConfig::load_default().unwrap();
        assert_eq!(config.detection_config().num_threads, 0);
        assert_eq!(config.output.print, PrintMode::Ask);
    }
}
