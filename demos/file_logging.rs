//! File logging example
//!
//! Loads a logger configuration from the environment (or defaults) and logs
//! with call-site information in UTC.
//!
//! Run with: cargo run --example file_logging

use nblogger::prelude::*;
use nblogger::{error, info};

fn main() -> Result<()> {
    println!("=== nblogger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("nblogger_file.log");
    let level = std::env::var("NBLOGGER_LEVEL")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Debug);

    let config = LoggerConfig::new(&path)
        .with_level(level)
        .with_flags(LogFlags::STD | LogFlags::MICROSECONDS | LogFlags::LONG_FILE | LogFlags::UTC);
    let logger = config.build()?;

    info!(logger, "Application started with level {}", logger.log_level());
    logger.debug("Loading configuration");
    error!(logger, "Simulated failure: {}", "connection refused");
    logger.close();

    let content = std::fs::read_to_string(&path)?;
    println!("Contents of {}:\n{}", path.display(), content);

    Ok(())
}
