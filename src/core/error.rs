//! Error types for the logger

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Destination could not be opened for append
    #[error("Failed to open log destination '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink is in a state where it cannot accept writes
    #[error("Writer error: {0}")]
    Writer(String),
}

impl LoggerError {
    /// Create an open error for the given destination
    pub fn open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::open("/var/log/app.log", io_err);
        assert!(matches!(err, LoggerError::Open { .. }));

        let err = LoggerError::config("LoggerBuilder", "missing destination");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::open("/var/log/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to open log destination '/var/log/app.log': access denied"
        );

        let err = LoggerError::config("LoggerBuilder", "missing destination");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerBuilder: missing destination"
        );

        let err = LoggerError::writer("sink already released");
        assert_eq!(err.to_string(), "Writer error: sink already released");
    }

    #[test]
    fn test_open_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::open("missing/dir/app.log", io_err);
        let source = err.source().expect("open error carries its io source");
        assert_eq!(source.to_string(), "no such directory");
    }
}
