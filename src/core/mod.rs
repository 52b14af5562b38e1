//! Core logger types and traits

pub mod config;
pub mod error;
pub mod flags;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod worker;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use flags::LogFlags;
pub use formatter::{push_decimal, CallSite, LineFormatter};
pub use log_level::LogLevel;
pub use log_record::{Command, LogRecord};
pub use logger::{Logger, LoggerBuilder, DEFAULT_CAPACITY};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use worker::DeliveryState;
