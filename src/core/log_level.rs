//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

/// Fixed-width tags written at the start of every line, indexed by `LogLevel as usize`.
const LEVEL_TAGS: [&str; 5] = ["[TRACE] ", "[DEBUG] ", "[INFO]  ", "[WARN]  ", "[ERROR] "];

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// The bracketed, space-padded tag that opens a formatted line.
    #[inline]
    pub fn tag(&self) -> &'static str {
        LEVEL_TAGS[*self as usize]
    }

    /// Whether a call at `level` passes a logger whose threshold is `threshold`.
    #[inline]
    pub fn admits(threshold: LogLevel, level: LogLevel) -> bool {
        level >= threshold
    }

    #[inline]
    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of `as_u8`; out-of-range values saturate to `Error`.
    #[inline]
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_fixed_width() {
        for level in LogLevel::ALL {
            assert_eq!(level.tag().len(), 8, "tag for {} is not 8 bytes", level);
            assert!(level.tag().contains(level.to_str()));
        }
        assert_eq!(LogLevel::Info.tag(), "[INFO]  ");
        assert_eq!(LogLevel::Error.tag(), "[ERROR] ");
    }

    #[test]
    fn test_admits() {
        assert!(LogLevel::admits(LogLevel::Warn, LogLevel::Error));
        assert!(LogLevel::admits(LogLevel::Warn, LogLevel::Warn));
        assert!(!LogLevel::admits(LogLevel::Warn, LogLevel::Info));
        assert!(!LogLevel::admits(LogLevel::Error, LogLevel::Trace));
    }

    #[test]
    fn test_u8_slot_conversion() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level.as_u8()), level);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    #[test]
    fn test_parse_warning_alias() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("fatal".parse::<LogLevel>().is_err());
    }
}
