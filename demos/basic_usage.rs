//! Basic logger usage example
//!
//! Demonstrates blocking logging to a file teed to stdout, and changing the
//! level at runtime.
//!
//! Run with: cargo run --example basic_usage

use nblogger::prelude::*;
use nblogger::{debug, info, warn};

fn main() -> Result<()> {
    println!("=== nblogger - Basic Usage Example ===\n");

    let path = std::env::temp_dir().join("nblogger_basic.log");
    let logger = Logger::new(
        &path,
        LogLevel::Trace,
        0,
        LogFlags::STD | LogFlags::SHORT_FILE | LogFlags::BLOCKING | LogFlags::STDOUT,
    )?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the threshold to INFO:");
    logger.set_log_level(LogLevel::Info);
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible), level is {}", logger.log_level());
    warn!(logger, "Warning message (visible)");

    logger.close();
    println!("\nLines were also appended to {}", path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
