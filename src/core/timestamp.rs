//! Timestamp formatting utilities
//!
//! Text sinks render the shared event timestamp in local time. The console
//! defaults to [`TimestampFormat::TimeOnly`], files to
//! [`TimestampFormat::DateTime`].

use crate::core::error::{LoggerError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Timestamp format options for text sinks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `10:30:45`
    #[default]
    TimeOnly,

    /// `2025-01-08 10:30:45`
    DateTime,

    /// RFC 3339 with local offset: `2025-01-08T10:30:45.123+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use sinklog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a local timestamp according to this format
    ///
    /// Fails with [`LoggerError::InvalidConfiguration`] when a custom
    /// strftime string contains an unknown specifier.
    pub fn format(&self, datetime: &DateTime<Local>) -> Result<String> {
        match self {
            TimestampFormat::TimeOnly => Ok(datetime.format("%H:%M:%S").to_string()),
            TimestampFormat::DateTime => Ok(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
            TimestampFormat::Rfc3339 => {
                Ok(datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, false))
            }
            TimestampFormat::Custom(format_str) => {
                // `to_string` would panic on a bad specifier; `write!` reports it
                let mut rendered = String::new();
                write!(rendered, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::config(
                        "TimestampFormat",
                        format!("invalid strftime format '{}'", format_str),
                    )
                })?;
                Ok(rendered)
            }
        }
    }
}
