//! Declarative logger configuration
//!
//! [`LoggerConfig`] mirrors the knobs of [`LoggerBuilder`](super::LoggerBuilder)
//! in a serde-friendly shape, so an application can keep its logging setup in
//! a JSON file next to the rest of its settings.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Default capacity of the sink registry
pub const DEFAULT_MAX_SINKS: usize = 32;

/// Stream used by the default console sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

/// # Example
///
/// ```
/// use sinklog::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{ "min_level": "INFO", "location_width": 20 }"#)
///     .unwrap();
/// assert_eq!(config.min_level, LogLevel::Info);
/// assert_eq!(config.max_sinks, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub quiet: bool,
    pub max_sinks: usize,
    pub console_target: ConsoleTarget,
    pub colors: bool,
    /// `None` renders plain `file:line`, `Some(width)` aligns to `width` chars
    pub location_width: Option<usize>,
    pub show_pid: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Trace,
            quiet: false,
            max_sinks: DEFAULT_MAX_SINKS,
            console_target: ConsoleTarget::Stderr,
            colors: true,
            location_width: None,
            show_pid: false,
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_sinks == 0 {
            return Err(LoggerError::config(
                "LoggerConfig",
                "max_sinks must be at least 1",
            ));
        }
        if self.location_width == Some(0) {
            return Err(LoggerError::config(
                "LoggerConfig",
                "location_width must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Trace);
        assert!(!config.quiet);
        assert_eq!(config.max_sinks, DEFAULT_MAX_SINKS);
        assert_eq!(config.console_target, ConsoleTarget::Stderr);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            LoggerConfig::from_json(r#"{ "quiet": true, "console_target": "stdout" }"#).unwrap();
        assert!(config.quiet);
        assert_eq!(config.console_target, ConsoleTarget::Stdout);
        assert_eq!(config.min_level, LogLevel::Trace);
    }

    #[test]
    fn test_from_json_rejects_zero_capacity() {
        let err = LoggerConfig::from_json(r#"{ "max_sinks": 0 }"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_json_level_is_case_insensitive() {
        let config = LoggerConfig::from_json(r#"{ "min_level": "info" }"#).unwrap();
        assert_eq!(config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_from_json_rejects_bad_level() {
        let err = LoggerConfig::from_json(r#"{ "min_level": "LOUD" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
