//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Display label of the logger that produced the entry
    pub label: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one call always produces exactly one output line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Render as `[<timestamp>] [<label>] <LEVEL> - <message>`
    ///
    /// `level` is passed pre-rendered so console output can colorize it.
    pub fn render(&self, timestamp: &str, level: &str) -> String {
        format!(
            "[{}] [{}] {} - {}",
            timestamp, self.label, level, self.message
        )
    }
}
