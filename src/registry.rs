//! Named logger registry
//!
//! Maps logger names to shared [`Logger`] handles. Lookups fall back from the
//! requested name to the main logger, and the main logger is created on demand
//! (console, debug level) when no configuration was ever loaded for it.
//!
//! # Example
//!
//! ```
//! use rust_logger_registry::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(LoggerRegistry::new());
//! registry.load_configuration(None, LoggerConfiguration::new(LogLevel::Info)).unwrap();
//! registry.load_configuration(Some("db"), LoggerConfiguration::new(LogLevel::Debug)).unwrap();
//!
//! registry.logger(Some("db")).debug("connection pool ready");
//! // Unknown names resolve to the main logger
//! assert!(Arc::ptr_eq(&registry.logger(Some("cache")), &registry.main_logger()));
//! ```

use crate::config::LoggerConfiguration;
use crate::core::{Appender, LogLevel, Logger, Result};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

/// Display label of the main logger when loaded from configuration
pub const MAIN_LABEL: &str = "MAIN";
/// Display label of the main logger created on demand
pub const DEFAULT_LABEL: &str = "DEFAULT";
/// Lookup name used when the calling file cannot be determined
pub const ANONYMOUS_CALLER: &str = "Anonymous";

const NO_CONFIGURATION_WARNING: &str = "No logging configuration loaded, use default debug logging";

/// Registry key; `Main` cannot collide with any user supplied name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryKey {
    Main,
    Named(String),
}

impl RegistryKey {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) => RegistryKey::Named(name.to_string()),
            None => RegistryKey::Main,
        }
    }
}

type LoggerFactory = Box<dyn Fn() -> Logger + Send + Sync>;

/// Process wide set of named loggers, shared by `Arc`
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<RegistryKey, Arc<Logger>>>,
    default_logger: LoggerFactory,
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::with_default_logger(default_logger)
    }
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose self-healed main logger is built by `factory`
    pub(crate) fn with_default_logger(
        factory: impl Fn() -> Logger + Send + Sync + 'static,
    ) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            default_logger: Box::new(factory),
        }
    }

    /// Install a logger built from `configuration`
    ///
    /// `None` registers the main logger (label `MAIN`); otherwise `name` is
    /// both the key and the display label. An existing entry is replaced.
    ///
    /// # Errors
    ///
    /// Fails when `filename` is given without `log_dir`, or when the file sink
    /// cannot be opened. The registry is left untouched in both cases.
    pub fn load_configuration(
        &self,
        name: Option<&str>,
        configuration: LoggerConfiguration,
    ) -> Result<()> {
        let label = name.unwrap_or(MAIN_LABEL);
        let logger = configuration.build_logger(label)?;
        self.loggers
            .write()
            .insert(RegistryKey::from_name(name), Arc::new(logger));
        Ok(())
    }

    /// Parse a JSON configuration object and load it
    pub fn load_configuration_json(&self, name: Option<&str>, json: &str) -> Result<()> {
        self.load_configuration(name, LoggerConfiguration::from_json(json)?)
    }

    /// Get the logger registered under `name`, falling back to the main logger
    ///
    /// Without a name, or with an empty one, the base name of the calling
    /// source file is used as the key (`"Anonymous"` when it cannot be
    /// determined). Never fails.
    #[track_caller]
    pub fn logger(&self, name: Option<&str>) -> Arc<Logger> {
        let key = match name.filter(|name| !name.is_empty()) {
            Some(name) => RegistryKey::Named(name.to_string()),
            None => RegistryKey::Named(caller_name(Location::caller())),
        };

        let main = self.ensure_main();
        self.loggers.read().get(&key).cloned().unwrap_or(main)
    }

    /// The main logger, created on demand
    pub fn main_logger(&self) -> Arc<Logger> {
        self.ensure_main()
    }

    /// Whether an entry is installed, without creating the main logger
    pub fn contains(&self, name: Option<&str>) -> bool {
        self.loggers.read().contains_key(&RegistryKey::from_name(name))
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    fn ensure_main(&self) -> Arc<Logger> {
        if let Some(main) = self.loggers.read().get(&RegistryKey::Main) {
            return Arc::clone(main);
        }

        let mut created = false;
        let main = Arc::clone(
            self.loggers
                .write()
                .entry(RegistryKey::Main)
                .or_insert_with(|| {
                    created = true;
                    Arc::new((self.default_logger)())
                }),
        );

        if created {
            main.warn(NO_CONFIGURATION_WARNING);
        }
        main
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loggers = self.loggers.read();
        f.debug_map().entries(loggers.iter()).finish()
    }
}

fn default_logger() -> Logger {
    let console: Box<dyn Appender> = Box::new(ConsoleAppender::new());
    Logger::builder()
        .label(DEFAULT_LABEL)
        .min_level(LogLevel::Debug)
        .boxed_appender(console)
        .build()
}

/// Base name of the calling source file
fn caller_name(location: &Location<'_>) -> String {
    Path::new(location.file())
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(ANONYMOUS_CALLER)
        .to_string()
}
