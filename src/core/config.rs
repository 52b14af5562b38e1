//! Serializable logger configuration
//!
//! ```
//! use nblogger::{LogFlags, LogLevel, LoggerConfig};
//!
//! let config = LoggerConfig::new("service.log")
//!     .with_level(LogLevel::Debug)
//!     .with_flags(LogFlags::STD | LogFlags::UTC);
//! assert_eq!(config.capacity, nblogger::DEFAULT_CAPACITY);
//! ```

use super::{
    error::Result,
    flags::LogFlags,
    log_level::LogLevel,
    logger::{Logger, DEFAULT_CAPACITY},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Construction parameters for a file-backed [`Logger`].
///
/// Every field except `path` has a default, so a config file only needs to
/// name the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub path: PathBuf,
    pub level: LogLevel,
    pub capacity: usize,
    pub flags: LogFlags,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            level: LogLevel::Info,
            capacity: DEFAULT_CAPACITY,
            flags: LogFlags::STD,
        }
    }
}

impl LoggerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Open the destination and start the logger.
    pub fn build(&self) -> Result<Logger> {
        Logger::builder()
            .path(self.path.clone())
            .level(self.level)
            .capacity(self.capacity)
            .flags(self.flags)
            .build()
    }
}
