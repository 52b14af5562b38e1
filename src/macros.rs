//! Logging macros for ergonomic log message formatting.
//!
//! The macros pass `format_args!` straight to the logger, so arguments are
//! only rendered when the level is enabled, and the recorded call site is
//! the macro invocation.
//!
//! # Examples
//!
//! ```
//! use nblogger::prelude::*;
//! use nblogger::info;
//! # #[derive(Default)] struct Discard;
//! # impl Sink for Discard {
//! #     fn write(&mut self, _: &[u8]) -> Result<()> { Ok(()) }
//! #     fn flush(&mut self) -> Result<()> { Ok(()) }
//! #     fn name(&self) -> &str { "discard" }
//! # }
//!
//! let logger = Logger::builder().sink(Discard).build()?;
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use nblogger::prelude::*;
/// # struct Discard;
/// # impl Sink for Discard {
/// #     fn write(&mut self, _: &[u8]) -> Result<()> { Ok(()) }
/// #     fn flush(&mut self) -> Result<()> { Ok(()) }
/// #     fn name(&self) -> &str { "discard" }
/// # }
/// # let logger = Logger::builder().sink(Discard).build()?;
/// use nblogger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use nblogger::prelude::*;
/// # struct Discard;
/// # impl Sink for Discard {
/// #     fn write(&mut self, _: &[u8]) -> Result<()> { Ok(()) }
/// #     fn flush(&mut self) -> Result<()> { Ok(()) }
/// #     fn name(&self) -> &str { "discard" }
/// # }
/// # let logger = Logger::builder().sink(Discard).build()?;
/// use nblogger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogFlags, LogLevel, Logger, Result, Sink};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<String>>);

    impl Sink for Capture {
        fn write(&mut self, line: &[u8]) -> Result<()> {
            self.0.lock().push_str(&String::from_utf8_lossy(line));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn blocking_logger(flags: LogFlags) -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::with_sink(
            capture.clone(),
            LogLevel::Trace,
            0,
            flags | LogFlags::BLOCKING,
        )
        .expect("build logger");
        (logger, capture)
    }

    #[test]
    fn test_level_macros() {
        let (logger, capture) = blocking_logger(LogFlags::empty());
        trace!(logger, "t {}", 1);
        debug!(logger, "d {}", 2);
        info!(logger, "i {}", 3);
        warn!(logger, "w {}", 4);
        error!(logger, "e {}", 5);
        log!(logger, LogLevel::Info, "plain");

        assert_eq!(
            capture.0.lock().as_str(),
            "[TRACE] t 1\n[DEBUG] d 2\n[INFO]  i 3\n[WARN]  w 4\n[ERROR] e 5\n[INFO]  plain\n"
        );
    }

    #[test]
    fn test_macro_call_site_is_invocation() {
        let (logger, capture) = blocking_logger(LogFlags::SHORT_FILE);
        info!(logger, "located");
        let line = line!() - 1;

        assert_eq!(
            capture.0.lock().as_str(),
            format!("[INFO]  macros.rs:{}: located\n", line)
        );
    }

    #[test]
    fn test_disabled_macro_skips_argument_rendering() {
        use std::fmt;
        use std::sync::atomic::{AtomicBool, Ordering};

        struct Loud<'a>(&'a AtomicBool);
        impl fmt::Display for Loud<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.store(true, Ordering::SeqCst);
                f.write_str("loud")
            }
        }

        let (logger, capture) = blocking_logger(LogFlags::empty());
        logger.set_log_level(LogLevel::Error);
        let rendered = AtomicBool::new(false);
        debug!(logger, "{}", Loud(&rendered));

        assert!(!rendered.load(Ordering::SeqCst));
        assert!(capture.0.lock().is_empty());
    }
}
