//! # Agent configuration model
//!
//! The agent configuration is a JSON document. It is parsed with
//! `serde_yaml`, which accepts JSON as well as YAML, and kept as an untyped
//! tree. Pipelines look up the sections they need by key path.

use serde::Deserialize;
use serde_yaml::Value;

use crate::TranslatorError;

/// Separator between the segments of a key path.
pub const KEY_PATH_SEPARATOR: &str = "::";

/// Parsed agent configuration.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct AgentConfig {
    root: Value,
}

impl AgentConfig {
    pub fn new(root: Value) -> Self {
        AgentConfig { root }
    }

    /// Parses the configuration from a JSON or YAML string.
    pub fn from_yaml_str(yaml_str: &str) -> Result<Self, TranslatorError> {
        serde_yaml::from_str(yaml_str).map_err(|e| {
            TranslatorError::InvalidConfiguration(format!("Failed to parse configuration: {}", e))
        })
    }

    /// Reads and parses the configuration file at `file_path`.
    pub fn from_yaml_file(file_path: &str) -> Result<Self, TranslatorError> {
        let yaml_str = std::fs::read_to_string(file_path).map_err(|e| {
            TranslatorError::InvalidConfiguration(format!(
                "Failed to read configuration file: {}",
                e
            ))
        })?;
        Self::from_yaml_str(&yaml_str)
    }

    /// Returns the value at a `::`-separated key path, such as
    /// `logs::metrics_collected::prometheus`.
    pub fn get(&self, key_path: &str) -> Option<&Value> {
        key_path
            .split(KEY_PATH_SEPARATOR)
            .try_fold(&self.root, |value, segment| value.get(segment))
    }

    /// Returns true when the key path exists. A key holding `null` exists.
    pub fn contains_key(&self, key_path: &str) -> bool {
        self.get(key_path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_config() {
        let config = AgentConfig::from_yaml_str(
            r#"{"logs": {"metrics_collected": {"prometheus": {"cluster_name": "test-cluster"}}}}"#,
        )
        .unwrap();
        assert!(config.contains_key("logs"));
        assert!(config.contains_key("logs::metrics_collected::prometheus"));
        assert_eq!(
            config
                .get("logs::metrics_collected::prometheus::cluster_name")
                .unwrap(),
            "test-cluster"
        );
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml_str = r#"
          logs:
            metrics_collected:
              prometheus:
        "#;
        let config = AgentConfig::from_yaml_str(yaml_str).unwrap();
        assert_eq!(
            config.get("logs::metrics_collected::prometheus"),
            Some(&Value::Null)
        );
        assert!(config.contains_key("logs::metrics_collected::prometheus"));
    }

    #[test]
    fn test_missing_key_path() {
        let config = AgentConfig::from_yaml_str(r#"{"logs": {"logs_collected": {}}}"#).unwrap();
        assert!(!config.contains_key("logs::metrics_collected::prometheus"));
        assert!(!config.contains_key("metrics"));
    }

    #[test]
    fn test_empty_config() {
        let config = AgentConfig::from_yaml_str("").unwrap();
        assert!(!config.contains_key("logs"));
        assert_eq!(config, AgentConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = AgentConfig::from_yaml_str(r#"{"logs": "#);
        match result {
            Err(TranslatorError::InvalidConfiguration(details)) => {
                assert!(details.contains("Failed to parse configuration"))
            }
            _ => panic!("Expected InvalidConfiguration error"),
        }
    }

    #[test]
    fn test_missing_config_file() {
        let result = AgentConfig::from_yaml_file("/nonexistent/amazon-cloudwatch-agent.json");
        match result {
            Err(TranslatorError::InvalidConfiguration(details)) => {
                assert!(details.contains("Failed to read configuration file"))
            }
            _ => panic!("Expected InvalidConfiguration error"),
        }
    }
}
