//! Foundation Config - Subject and logging settings
//!
//! Loaded from a single JSON file. Every field has a default, so a partial
//! file (or none at all) is valid.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name
pub const FOUNDATION_CONFIG_FILE: &str = "foundation.json";

/// Levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Foundation Config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoundationConfig {
    pub subject: SubjectConfig,
    pub logging: LoggingConfig,
}

impl FoundationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.subject.validate()?;
        self.logging.validate()
    }
}

// ============================================================================
// Subject Config
// ============================================================================

/// Per-Subject settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubjectConfig {
    /// Name recorded on every log record the Subject emits
    pub name: String,

    /// Log each successful delivery at TRACE level
    pub trace_deliveries: bool,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            name: "subject".to_string(),
            trace_deliveries: false,
        }
    }
}

impl SubjectConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_trace_deliveries(mut self, enabled: bool) -> Self {
        self.trace_deliveries = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Config("subject name must not be empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Logging Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Default filter level, overridden by `RUST_LOG`
    pub level: String,

    /// Include the module target in formatted records
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "unknown log level '{}', expected one of {}",
                self.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FoundationConfig::new();
        assert_eq!(config.subject.name, "subject");
        assert!(!config.subject.trace_deliveries);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            FoundationConfig::from_json_str(r#"{ "subject": { "name": "rpc-listener" } }"#)
                .unwrap();

        assert_eq!(config.subject.name, "rpc-listener");
        assert!(!config.subject.trace_deliveries);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let config = FoundationConfig::from_json_str(
            r#"{ "subject": { "traceDeliveries": true }, "logging": { "level": "debug", "withTarget": true } }"#,
        )
        .unwrap();

        assert!(config.subject.trace_deliveries);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.with_target);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = FoundationConfig::from_json_str(r#"{ "logging": { "level": "loud" } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = FoundationConfig::from_json_str(r#"{ "subject": { "name": " " } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = FoundationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = FoundationConfig::load(dir.path().join(FOUNDATION_CONFIG_FILE)).unwrap();
        assert_eq!(config, FoundationConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FOUNDATION_CONFIG_FILE);

        let config = FoundationConfig {
            subject: SubjectConfig::named("session").with_trace_deliveries(true),
            logging: LoggingConfig::debug(),
        };
        config.save(&path).unwrap();

        assert_eq!(FoundationConfig::load(&path).unwrap(), config);
    }
}
