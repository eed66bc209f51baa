//! Configuration for parameter parsing and link generation
//!
//! All fields have defaults, so an empty document is a valid config.
//!
//! ```yaml
//! default_limit: 20
//! default_page: 1
//! unknown_keys: strict
//! page_counter: independent
//! trust_forwarded_proto: false
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the parser treats query keys it does not know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Pass unknown keys through, coercing numeric-looking values
    #[default]
    Permissive,
    /// Drop unknown keys
    Strict,
}

/// How the prev link's page number is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCounter {
    /// One counter, incremented for next and then decremented by two for prev
    #[default]
    Running,
    /// next = requested + 1, prev = requested - 1, decided independently
    Independent,
}

/// Link generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Limit used when the `limit` parameter is not a valid number
    pub default_limit: u64,
    /// Page used when the `page` parameter is not a valid number
    pub default_page: u64,
    /// Unknown query key handling
    pub unknown_keys: UnknownKeyPolicy,
    /// Page counter model for next/prev links
    pub page_counter: PageCounter,
    /// Honor `X-Forwarded-Proto` / `Forwarded` when deciding the scheme
    pub trust_forwarded_proto: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            default_limit: 5,
            default_page: 1,
            unknown_keys: UnknownKeyPolicy::default(),
            page_counter: PageCounter::default(),
            trust_forwarded_proto: true,
        }
    }
}

impl LinkConfig {
    /// Create the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown key policy
    pub fn with_unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Set the page counter model
    pub fn with_page_counter(mut self, counter: PageCounter) -> Self {
        self.page_counter = counter;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(Error::config("default_limit must be at least 1"));
        }
        if self.default_page == 0 {
            return Err(Error::config("default_page must be at least 1"));
        }
        Ok(())
    }
}

/// Load a config file (YAML or JSON)
pub fn load_config(path: impl AsRef<Path>) -> Result<LinkConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_config_from_str(&content)
}

/// Load a config from a YAML (or JSON) string
pub fn load_config_from_str(yaml: &str) -> Result<LinkConfig> {
    // serde_yaml rejects a fully empty document for structs
    if yaml.trim().is_empty() {
        return Ok(LinkConfig::default());
    }

    let config: LinkConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    tracing::debug!(?config, "Loaded link config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LinkConfig::default();
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.default_page, 1);
        assert_eq!(config.unknown_keys, UnknownKeyPolicy::Permissive);
        assert_eq!(config.page_counter, PageCounter::Running);
        assert!(config.trust_forwarded_proto);
    }

    #[test]
    fn test_load_partial_yaml() {
        let yaml = r"
default_limit: 20
unknown_keys: strict
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.default_page, 1);
        assert_eq!(config.unknown_keys, UnknownKeyPolicy::Strict);
        assert_eq!(config.page_counter, PageCounter::Running);
    }

    #[test]
    fn test_load_json() {
        let config =
            load_config_from_str(r#"{"page_counter": "independent", "trust_forwarded_proto": false}"#)
                .unwrap();
        assert_eq!(config.page_counter, PageCounter::Independent);
        assert!(!config.trust_forwarded_proto);
    }

    #[test]
    fn test_load_empty() {
        assert_eq!(load_config_from_str("  \n").unwrap(), LinkConfig::default());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let err = load_config_from_str("default_limit: 0").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = load_config_from_str("unknown_keys: lenient").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_page: 3").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.default_page, 3);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/links.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
