//! Appender implementations

pub mod console;
pub mod rotating_file;

pub use console::ConsoleAppender;
pub use rotating_file::{
    RotatingFileAppender, RotationPolicy, DEFAULT_DATE_PATTERN, DEFAULT_MAX_FILES,
    DEFAULT_MAX_FILE_SIZE,
};

pub use crate::core::Appender;
