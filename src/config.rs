//! YAML configuration.
//!
//! ```yaml
//! duplicates:
//!   threshold: 0.3
//!   max-results: 5
//!   min-query-length: 3
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use crate::duplicates::DuplicateConfig;
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub duplicates: DuplicateConfig,
}

impl Config {
    /// Parse and validate configuration YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, ChartError> {
        // an empty file deserializes as YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ChartError> {
        let dup = &self.duplicates;
        if !(0.0..=1.0).contains(&dup.threshold) {
            return Err(ChartError::Config(format!(
                "duplicates.threshold must be between 0 and 1, got {}",
                dup.threshold
            )));
        }
        if dup.max_results == 0 {
            return Err(ChartError::Config(
                "duplicates.max-results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.duplicates.threshold, 0.3);
        assert_eq!(config.duplicates.max_results, 5);
        assert_eq!(config.duplicates.min_query_length, 3);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_yaml_str("duplicates:\n  threshold: 0.2\n").unwrap();
        assert_eq!(config.duplicates.threshold, 0.2);
        assert_eq!(config.duplicates.max_results, 5);
    }

    #[test]
    fn test_full_override() {
        let yaml = "duplicates:\n  threshold: 0.35\n  max-results: 10\n  min-query-length: 4\n";
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.duplicates.threshold, 0.35);
        assert_eq!(config.duplicates.max_results, 10);
        assert_eq!(config.duplicates.min_query_length, 4);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_yaml_str("duplicates:\n  threshold: 1.5\n").unwrap_err();
        assert!(matches!(err, ChartError::Config(ref msg) if msg.contains("threshold")));

        let err = Config::from_yaml_str("duplicates:\n  max-results: 0\n").unwrap_err();
        assert!(matches!(err, ChartError::Config(ref msg) if msg.contains("max-results")));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Config::from_yaml_str("duplicates: [not, a, map]");
        assert!(matches!(result, Err(ChartError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "duplicates:\n  max-results: 3").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.duplicates.max_results, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/chordchart.yaml");
        assert!(matches!(result, Err(ChartError::Io { .. })));
    }
}
