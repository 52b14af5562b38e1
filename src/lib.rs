//! # nblogger
//!
//! A leveled text logger with two delivery modes.
//!
//! ## Features
//!
//! - **Non-blocking by default**: callers format the line and hand it to a
//!   dedicated writer thread through a bounded channel
//! - **No silent loss**: a full channel throttles callers instead of dropping
//!   records, and `close` drains everything queued before it
//! - **Strict ordering**: lines from one thread reach the sink in issue order
//! - **Blocking mode**: `LogFlags::BLOCKING` writes on the caller's thread
//! - **Stable line layout**: `[LEVEL] YYYY/MM/DD HH:MM:SS.micros file:line: message`

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, DeliveryState, LineFormatter, LogFlags, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, Sink, DEFAULT_CAPACITY,
    };
    pub use crate::sinks::{FileSink, StdoutSink, TeeSink};
}

pub use crate::core::{
    CallSite, DeliveryState, LineFormatter, LogFlags, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, Sink, DEFAULT_CAPACITY,
};
pub use crate::sinks::{FileSink, StdoutSink, TeeSink};
