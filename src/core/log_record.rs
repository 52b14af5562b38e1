//! Records and commands passed from callers to the writer

use super::log_level::LogLevel;

/// A formatted line waiting to be written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub line: Vec<u8>,
}

impl LogRecord {
    pub fn new(level: LogLevel, line: Vec<u8>) -> Self {
        Self { level, line }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.line
    }
}

/// Message on the delivery channel.
///
/// `Terminate` is always the last command a worker handles; everything
/// queued ahead of it is written first.
#[derive(Debug)]
pub enum Command {
    Write(LogRecord),
    Terminate,
}
