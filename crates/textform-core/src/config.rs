//! Declarative transform configuration
//!
//! [`TransformConfig`] is the serializable form of a [`Transform`]: rule
//! strings plus the lookup sources expansions resolve against. Embedders load
//! it from their own configuration files and call [`TransformConfig::build`].
//!
//! ```
//! use textform_core::TransformConfig;
//!
//! let config = TransformConfig::from_json(r#"{
//!     "rules": ["trim", "expand:\\$\\{(?P<key>\\w+)\\}"],
//!     "variables": { "NAME": "Ada" }
//! }"#).unwrap();
//!
//! let transform = config.build().unwrap();
//! assert_eq!(transform.transform("  ${NAME}  ").unwrap(), "Ada");
//! ```

use crate::transform::{Lookup, Transform, TransformOption};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable transform configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Rule strings in the `tag[:argument]` grammar, applied in order
    pub rules: Vec<String>,

    /// Static variables, consulted before any other lookup source
    pub variables: BTreeMap<String, String>,

    /// Expand `${KEY}` references from the process environment
    pub expand_env: bool,

    /// Value for variables no other source resolves; `%s` is replaced by the
    /// variable name
    pub fallback: Option<String>,
}

impl TransformConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that can never work
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = self.variables.keys().find(|key| key.is_empty()) {
            return Err(Error::Config {
                message: format!("variable names must not be empty (got {:?})", key),
            });
        }
        Ok(())
    }

    /// Configuration steps equivalent to this configuration.
    ///
    /// Lookup order is variables, environment, fallback. The `${KEY}` rule
    /// added by `expand_env` runs before the configured rules.
    pub fn options(&self) -> Vec<TransformOption> {
        let mut options = Vec::new();
        if !self.variables.is_empty() {
            options.push(TransformOption::lookups([Lookup::map(
                self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            )]));
        }
        if self.expand_env {
            options.push(TransformOption::ExpandEnv);
        }
        if let Some(fallback) = &self.fallback {
            options.push(TransformOption::lookups([Lookup::constant(fallback.as_str())]));
        }
        if !self.rules.is_empty() {
            options.push(TransformOption::string_rules(self.rules.iter().cloned()));
        }
        options
    }

    /// Validate the configuration and build a [`Transform`] from it
    pub fn build(&self) -> Result<Transform> {
        self.validate()?;
        let transform = Transform::new(self.options())?;
        log::debug!(
            "Built transform with {} rules and {} lookups",
            transform.rule_count(),
            transform.lookups.len()
        );
        Ok(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_identity() {
        let transform = TransformConfig::default().build().unwrap();
        assert_eq!(transform.rule_count(), 0);
        assert_eq!(transform.transform(" x ").unwrap(), " x ");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TransformConfig::from_json(r#"{"rules": ["trim, upcase"]}"#).unwrap();
        assert!(!config.expand_env);
        assert!(config.variables.is_empty());
        assert_eq!(config.build().unwrap().transform(" a ").unwrap(), "A");
    }

    #[test]
    fn test_fallback_lookup() {
        let config = TransformConfig {
            rules: vec!["expand:\\{(?P<key>\\w+)\\}".to_string()],
            variables: BTreeMap::from([("KNOWN".to_string(), "yes".to_string())]),
            fallback: Some("<%s>".to_string()),
            ..Default::default()
        };
        let transform = config.build().unwrap();
        assert_eq!(transform.transform("{KNOWN} {OTHER}").unwrap(), "yes <OTHER>");
    }

    #[test]
    fn test_expand_env_runs_first() {
        let config = TransformConfig {
            rules: vec!["downcase".to_string()],
            variables: BTreeMap::from([("NAME".to_string(), "ADA".to_string())]),
            expand_env: true,
            ..Default::default()
        };
        let transform = config.build().unwrap();
        assert_eq!(transform.rule_count(), 2);
        assert_eq!(transform.transform("${NAME}").unwrap(), "ada");
    }

    #[test]
    fn test_invalid_rule_is_config_error() {
        let err = TransformConfig::from_json(r#"{"rules": ["nope"]}"#)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_variable_name_rejected() {
        let err = TransformConfig::from_json(r#"{"variables": {"": "x"}}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = TransformConfig::from_json("{").unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let config = TransformConfig {
            expand_env: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["expand_env"], serde_json::json!(true));
        assert_eq!(json["rules"], serde_json::json!([]));
    }
}
