//! Appender trait for log output destinations (sinks)

use super::{error::Result, log_entry::LogEntry};
use std::path::Path;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Base path written by file sinks; `None` for streams
    fn target(&self) -> Option<&Path> {
        None
    }
}
