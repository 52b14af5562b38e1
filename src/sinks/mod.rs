//! Sink implementations

pub mod console;
pub mod file;
pub mod tee;

pub use console::StdoutSink;
pub use file::FileSink;
pub use tee::TeeSink;

pub use crate::core::Sink;
