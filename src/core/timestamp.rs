//! Timestamp formatting for log lines
//!
//! Every entry written by the console and file sinks carries a timestamp.
//! The format is configurable per appender.

use crate::core::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_logger_registry::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 in local time with offset: `2025-01-08T11:30:45.123+01:00`
    LocalRfc3339,

    /// Custom strftime format, rendered in UTC
    ///
    /// A pattern chrono cannot render falls back to [`TimestampFormat::Iso8601`].
    Custom(String),
}

const ISO8601_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

impl TimestampFormat {
    /// Check that a custom pattern only uses known strftime directives
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an unrenderable `Custom` pattern
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str) if !is_renderable(format_str) => Err(
                LoggerError::config("TimestampFormat", format!("invalid pattern '{}'", format_str)),
            ),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format(ISO8601_PATTERN).to_string(),
            TimestampFormat::LocalRfc3339 => datetime
                .with_timezone(&Local)
                .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
                .to_string(),
            TimestampFormat::Custom(format_str) if is_renderable(format_str) => {
                datetime.format(format_str).to_string()
            }
            TimestampFormat::Custom(_) => datetime.format(ISO8601_PATTERN).to_string(),
        }
    }
}

fn is_renderable(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
