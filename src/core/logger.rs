//! Logger handle: a display label, a minimum level and a set of appenders

use super::{appender::Appender, error::Result, log_entry::LogEntry, log_level::LogLevel};
use parking_lot::Mutex;
use std::path::PathBuf;

/// A configured logger.
///
/// Loggers are handed out by the registry as `Arc<Logger>`, so every emit
/// method takes `&self`. Appenders sit behind a mutex and are driven
/// synchronously on the calling thread.
pub struct Logger {
    label: String,
    min_level: LogLevel,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
}

impl Logger {
    #[must_use]
    pub fn new(label: impl Into<String>, min_level: LogLevel) -> Self {
        Self {
            label: label.into(),
            min_level,
            appenders: Mutex::new(Vec::new()),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_logger_registry::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .label("worker")
    ///     .min_level(LogLevel::Debug)
    ///     .appender(ConsoleAppender::new())
    ///     .build();
    /// assert_eq!(logger.label(), "worker");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.get_mut().push(appender);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Names of the attached appenders, in emit order
    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .lock()
            .iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Base paths of the attached file appenders
    pub fn targets(&self) -> Vec<PathBuf> {
        self.appenders
            .lock()
            .iter()
            .filter_map(|a| a.target().map(PathBuf::from))
            .collect()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message.into()).with_label(self.label.as_str());
        let mut appenders = self.appenders.lock();
        Self::process_sync(&mut appenders, &entry);
    }

    /// Hand the entry to every appender with per-appender panic isolation
    ///
    /// A failing or panicking appender is reported on stderr and the
    /// remaining appenders still receive the entry.
    fn process_sync(appenders: &mut [Box<dyn Appender>], entry: &LogEntry) {
        for (idx, appender) in appenders.iter_mut().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)?;
                appender.flush()
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} ({}) failed: {}", idx, appender.name(), e);
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                }
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .field("min_level", &self.min_level)
            .field("appenders", &self.appender_names())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    label: String,
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            label: String::new(),
            min_level: LogLevel::Info,
            appenders: Vec::new(),
        }
    }

    /// Set the display label printed on every line
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Add an already boxed appender
    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new(self.label, self.min_level);
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
