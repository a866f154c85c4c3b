//! # Rust Logger Registry
//!
//! A registry of named loggers on top of a small synchronous logging engine.
//!
//! ## Features
//!
//! - **Named loggers**: register several configurations and fetch them by name
//! - **Fallback chain**: unknown names resolve to the main logger, which is
//!   created on demand when nothing was configured
//! - **Console and rotating file sinks**: daily files with a size cap and a
//!   retention limit
//! - **Caller inference**: `logger(None)` keys the lookup by the calling file

pub mod appenders;
pub mod config;
pub mod core;
pub mod macros;
pub mod registry;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
    pub use crate::config::LoggerConfiguration;
    pub use crate::core::{
        Appender, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError, Result, TimestampFormat,
    };
    pub use crate::registry::{LoggerRegistry, RegistryKey};
}

pub use appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
pub use config::LoggerConfiguration;
pub use core::{
    Appender, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError, Result, TimestampFormat,
};
pub use registry::{LoggerRegistry, RegistryKey, ANONYMOUS_CALLER, DEFAULT_LABEL, MAIN_LABEL};
