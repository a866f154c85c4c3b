//! Logger configuration
//!
//! A configuration picks the sink for one registry entry: a console sink when
//! no file name is given, a daily rotating file sink otherwise.

use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
use crate::core::{Appender, LogLevel, Logger, LoggerError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration of one named logger
///
/// # Examples
///
/// ```
/// use rust_logger_registry::{LogLevel, LoggerConfiguration};
///
/// let console = LoggerConfiguration::new(LogLevel::Info);
/// let file = LoggerConfiguration::new(LogLevel::Debug).with_file("/var/log/my-app", "service.log");
///
/// let parsed = LoggerConfiguration::from_json(
///     r#"{"level": "debug", "logDir": "/var/log/my-app", "filename": "service.log"}"#,
/// ).unwrap();
/// assert_eq!(parsed, file);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfiguration {
    pub level: LogLevel,
    #[serde(default, alias = "log_dir")]
    pub log_dir: Option<PathBuf>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl LoggerConfiguration {
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            log_dir: None,
            filename: None,
        }
    }

    /// Log to `<log_dir>/<filename>` with daily rotation
    #[must_use = "builder methods return a new value"]
    pub fn with_file(mut self, log_dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        self.log_dir = Some(log_dir.into());
        self.filename = Some(filename.into());
        self
    }

    /// Parse a configuration from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// A file name requires a log directory
    pub fn validate(&self) -> Result<()> {
        if self.filename.is_some() && self.log_dir.is_none() {
            return Err(LoggerError::config(
                "LoggerConfiguration",
                "You must give a logDir if you give a filename to logger configuration",
            ));
        }
        Ok(())
    }

    /// Build the sink described by this configuration
    fn appender(&self) -> Result<Box<dyn Appender>> {
        match (&self.filename, &self.log_dir) {
            (None, _) => Ok(Box::new(ConsoleAppender::new())),
            (Some(filename), Some(log_dir)) => Ok(Box::new(RotatingFileAppender::with_policy(
                log_dir,
                filename.as_str(),
                RotationPolicy::default(),
            )?)),
            (Some(_), None) => Err(LoggerError::config(
                "LoggerConfiguration",
                "logDir is required with filename",
            )),
        }
    }

    /// Validate, then create a logger carrying `label`
    pub fn build_logger(&self, label: &str) -> Result<Logger> {
        self.validate()?;
        Ok(Logger::builder()
            .label(label)
            .min_level(self.level)
            .boxed_appender(self.appender()?)
            .build())
    }
}
