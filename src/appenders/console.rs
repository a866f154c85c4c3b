//! Console appender implementation

use crate::core::{Appender, LogEntry, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleAppender {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(cfg!(feature = "console"))
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_registry::appenders::ConsoleAppender;
    /// use rust_logger_registry::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::LocalRfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format one line: `[<timestamp>] [<label>] <LEVEL> - <message>`
    pub(crate) fn format_line(&self, entry: &LogEntry) -> String {
        let level = format!("{:5}", entry.level.to_str());

        #[cfg(feature = "console")]
        let level = if self.use_colors {
            level.color(entry.level.color_code()).to_string()
        } else {
            level
        };

        let timestamp_str = self.timestamp_format.format(&entry.timestamp);
        entry.render(&timestamp_str, &level)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_line(entry);

        // Route Warn and Error levels to stderr, others to stdout
        if entry.level.is_diagnostic() {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
