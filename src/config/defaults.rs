//! Default value functions for serde deserialization.

pub fn points_path() -> String {
    "data_points_16.json".to_string()
}

pub fn config_path() -> &'static str {
    "configs/config.yaml"
}
