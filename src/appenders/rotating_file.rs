//! Rotating file appender with daily and size based rollover
//!
//! The active file is named `<filename><date-suffix>` (for example
//! `svc.log.2026-10-16`). When the local date changes writing moves to the
//! new day's file; when the active file reaches the size cap writing moves to
//! the next numbered file of the same day (`svc.log.2026-10-16.1`, `.2`, ...).
//! On open and after every switch the oldest files beyond the retention cap
//! are removed. Only names of the form `<filename><date-suffix>[.<n>]` count,
//! so loggers sharing a directory never delete each other's files.

use crate::core::appender::Appender;
use crate::core::error::{LoggerError, Result};
use crate::core::log_entry::LogEntry;
use crate::core::timestamp::TimestampFormat;
use chrono::format::{Item, Parsed, StrftimeItems};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Default strftime suffix appended to the file name
pub const DEFAULT_DATE_PATTERN: &str = ".%Y-%m-%d";
/// Default per-file size cap in bytes
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5_000_000;
/// Default number of log files kept on disk
pub const DEFAULT_MAX_FILES: usize = 120;

/// Configuration for rotating file appender
///
/// # Examples
///
/// ```
/// use rust_logger_registry::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_file_size(1024 * 1024)
///     .with_max_files(7);
/// assert_eq!(policy.date_pattern, ".%Y-%m-%d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// strftime pattern rendered with the local date and appended to the file name
    pub date_pattern: String,
    /// Size in bytes at which writing moves to the next numbered file
    pub max_file_size: u64,
    /// Maximum number of log files to keep, the active one included
    pub max_files: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl RotationPolicy {
    /// Create a new rotation policy with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_files(mut self, count: usize) -> Self {
        self.max_files = count;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_files == 0 {
            return Err(LoggerError::config(
                "RotationPolicy",
                "max_files must be at least 1",
            ));
        }
        if self.max_file_size == 0 {
            return Err(LoggerError::config(
                "RotationPolicy",
                "max_file_size must be greater than zero",
            ));
        }
        if StrftimeItems::new(&self.date_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "RotationPolicy",
                format!("invalid date pattern '{}'", self.date_pattern),
            ));
        }
        Ok(())
    }

    /// Whether `suffix` is something `date_pattern` could have rendered
    fn matches_suffix(&self, suffix: &str) -> bool {
        let mut parsed = Parsed::default();
        chrono::format::parse(&mut parsed, suffix, StrftimeItems::new(&self.date_pattern)).is_ok()
    }
}

/// Rotating file appender
///
/// # Examples
///
/// ```no_run
/// use rust_logger_registry::appenders::{RotatingFileAppender, RotationPolicy};
///
/// let appender = RotatingFileAppender::new("/var/log/my-app", "main.log").unwrap();
///
/// let policy = RotationPolicy::new().with_max_files(30);
/// let appender = RotatingFileAppender::with_policy("/var/log/my-app", "service.log", policy).unwrap();
/// ```
pub struct RotatingFileAppender {
    dir: PathBuf,
    filename: String,
    base_path: PathBuf,
    policy: RotationPolicy,
    writer: Option<BufWriter<File>>,
    current_path: PathBuf,
    current_suffix: String,
    current_index: usize,
    current_size: u64,
    timestamp_format: TimestampFormat,
}

impl RotatingFileAppender {
    /// Create a rotating appender writing `<dir>/<filename><date-suffix>`
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be created or opened
    pub fn new(dir: impl AsRef<Path>, filename: impl Into<String>) -> Result<Self> {
        Self::with_policy(dir, filename, RotationPolicy::default())
    }

    /// Create a rotating appender with a custom policy
    ///
    /// # Errors
    ///
    /// Returns error if the policy or file name is invalid, or if the
    /// directory or file cannot be created or opened
    pub fn with_policy(
        dir: impl AsRef<Path>,
        filename: impl Into<String>,
        policy: RotationPolicy,
    ) -> Result<Self> {
        Self::open_at(dir, filename, policy, Local::now())
    }

    fn open_at(
        dir: impl AsRef<Path>,
        filename: impl Into<String>,
        policy: RotationPolicy,
        now: DateTime<Local>,
    ) -> Result<Self> {
        policy.validate()?;

        let dir = dir.as_ref().to_path_buf();
        let filename = filename.into();
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(LoggerError::config(
                "RotatingFileAppender",
                format!("'{}' is not a plain file name", filename),
            ));
        }

        fs::create_dir_all(&dir).map_err(|e| {
            LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", dir.display()),
                e,
            )
        })?;

        let base_path = dir.join(&filename);
        let mut appender = Self {
            dir,
            filename,
            base_path,
            policy,
            writer: None,
            current_path: PathBuf::new(),
            current_suffix: String::new(),
            current_index: 0,
            current_size: 0,
            timestamp_format: TimestampFormat::default(),
        };

        let suffix = appender.date_suffix(&now);
        let index = appender.latest_index(&suffix);
        appender.open(suffix, index)?;

        // Files left over from earlier runs count against the cap too
        if let Err(e) = appender.prune() {
            eprintln!("[WARN] Log retention failed: {}. Continuing.", e);
        }
        Ok(appender)
    }

    /// Set the timestamp format for this appender
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// `<dir>/<filename>`, without any suffix
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    /// File currently receiving writes
    #[must_use]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    fn date_suffix(&self, now: &DateTime<Local>) -> String {
        now.format(&self.policy.date_pattern).to_string()
    }

    fn path_for(&self, suffix: &str, index: usize) -> PathBuf {
        let name = if index == 0 {
            format!("{}{}", self.filename, suffix)
        } else {
            format!("{}{}.{}", self.filename, suffix, index)
        };
        self.dir.join(name)
    }

    /// Highest numbered file already present for the given day
    fn latest_index(&self, suffix: &str) -> usize {
        let mut index = 0;
        while self.path_for(suffix, index + 1).exists() {
            index += 1;
        }
        index
    }

    fn open(&mut self, suffix: String, index: usize) -> Result<()> {
        let path = self.path_for(&suffix, index);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_appender(path.display().to_string(), format!("Failed to open: {}", e))
            })?;

        let current_size = file
            .metadata()
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("Cannot access file metadata: {}", e),
                )
            })?
            .len();

        self.writer = Some(BufWriter::new(file));
        self.current_path = path;
        self.current_suffix = suffix;
        self.current_index = index;
        self.current_size = current_size;
        Ok(())
    }

    /// Decide which file the next entry belongs to, if not the current one
    fn next_target(&self, now: &DateTime<Local>) -> Option<(String, usize)> {
        let suffix = self.date_suffix(now);
        if suffix != self.current_suffix {
            let index = self.latest_index(&suffix);
            Some((suffix, index))
        } else if self.current_size >= self.policy.max_file_size {
            Some((suffix, self.current_index + 1))
        } else {
            None
        }
    }

    fn rotate(&mut self, suffix: String, index: usize) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.current_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        self.open(suffix, index)?;
        self.prune()
    }

    /// Whether `name` is one of this appender's files:
    /// `<filename><suffix>` or `<filename><suffix>.<n>`
    fn is_own_file(&self, name: &str) -> bool {
        let Some(rest) = name.strip_prefix(self.filename.as_str()) else {
            return false;
        };
        if self.policy.matches_suffix(rest) {
            return true;
        }
        match rest.rsplit_once('.') {
            Some((suffix, index)) => {
                !index.is_empty()
                    && index.bytes().all(|b| b.is_ascii_digit())
                    && self.policy.matches_suffix(suffix)
            }
            None => false,
        }
    }

    /// Remove the oldest files beyond `max_files`; never the active one
    fn prune(&self) -> Result<()> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            LoggerError::file_rotation(
                self.dir.display().to_string(),
                format!("Failed to list log directory: {}", e),
            )
        })?;

        let mut files: Vec<(SystemTime, PathBuf)> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| self.is_own_file(name))
            })
            .filter_map(|e| {
                let modified = e.metadata().and_then(|m| m.modified()).ok()?;
                Some((modified, e.path()))
            })
            .collect();

        // Newest first; names break ties so numbered files order correctly
        files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

        let mut kept = 1;
        for (_, path) in files {
            if path == self.current_path {
                continue;
            }
            if kept < self.policy.max_files {
                kept += 1;
                continue;
            }
            if let Err(e) = fs::remove_file(&path) {
                eprintln!("[WARN] Failed to remove old log file {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    fn append_at(&mut self, entry: &LogEntry, now: DateTime<Local>) -> Result<()> {
        if let Some((suffix, index)) = self.next_target(&now) {
            if let Err(e) = self.rotate(suffix, index) {
                eprintln!("[WARN] Log rotation failed: {}. Continuing with current file.", e);

                if self.writer.is_none() {
                    let (suffix, index) = (self.current_suffix.clone(), self.current_index);
                    if let Err(reopen_err) = self.open(suffix, index) {
                        eprintln!(
                            "[ERROR] Failed to reopen log file after rotation failure: {}",
                            reopen_err
                        );
                        return Err(e);
                    }
                }

                // Let the file grow past the cap instead of retrying on every entry
                self.current_size = 0;
            }
        }

        let timestamp_str = self.timestamp_format.format(&entry.timestamp);
        let level = format!("{:5}", entry.level.to_str());
        let formatted = format!("{}\n", entry.render(&timestamp_str, &level));

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Writer not initialized"))?;
        writer.write_all(formatted.as_bytes()).map_err(|e| {
            LoggerError::file_appender(
                self.current_path.display().to_string(),
                format!("Failed to write log entry: {}", e),
            )
        })?;
        self.current_size += formatted.len() as u64;
        Ok(())
    }
}

impl Appender for RotatingFileAppender {
    fn name(&self) -> &str {
        "rotating_file"
    }

    fn target(&self) -> Option<&Path> {
        Some(&self.base_path)
    }

    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.append_at(entry, Local::now())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.current_path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }
}

impl Drop for RotatingFileAppender {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
