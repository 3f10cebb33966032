//! Configuration for the calculator module.

use serde::{Deserialize, Serialize};

/// What integer `sum` and `multiply` do when the exact result does not fit in `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Recompute the result in floating point.
    #[default]
    Promote,
    /// Fail with `InvalidInput`.
    Reject,
}

/// Configuration for the calculator module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Integer overflow handling for `sum` and `multiply`.
    /// Default: `promote`
    pub integer_overflow: OverflowPolicy,
}

impl CalculatorConfig {
    /// Parse the configuration from a YAML document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` if the document is malformed, has unknown
    /// fields, or names an unknown overflow policy.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Error returned when calculator configuration cannot be read.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("calculator config is not valid: {message}")]
    Parse { message: String },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CalculatorConfig::default();
        assert_eq!(cfg.integer_overflow, OverflowPolicy::Promote);
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r"
integer_overflow: reject
";
        let cfg = CalculatorConfig::from_yaml(yaml).unwrap();
        assert_eq!(cfg.integer_overflow, OverflowPolicy::Reject);
    }

    #[test]
    fn test_config_yaml_applies_defaults() {
        let cfg = CalculatorConfig::from_yaml("{}").unwrap();
        assert_eq!(cfg, CalculatorConfig::default());
    }

    #[test]
    fn test_config_yaml_rejects_unknown_fields() {
        let yaml = r"
integer_overflow: promote
precision: 7
";
        let result = CalculatorConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_config_yaml_rejects_unknown_policy() {
        let result = CalculatorConfig::from_yaml("integer_overflow: saturate");
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("calculator config is not valid"));
    }
}
