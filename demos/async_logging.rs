//! Asynchronous logging example
//!
//! Several threads share one logger; a single writer thread drains the
//! channel and `close` waits for every queued line.
//!
//! Run with: cargo run --example async_logging

use nblogger::info;
use nblogger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() -> Result<()> {
    println!("=== nblogger - Async Logging Example ===\n");

    let path = std::env::temp_dir().join("nblogger_async.log");
    let logger = Arc::new(
        Logger::builder()
            .path(&path)
            .level(LogLevel::Info)
            .capacity(256)
            .flags(LogFlags::STD | LogFlags::MICROSECONDS)
            .build()?,
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..10_000 {
                    info!(logger, "worker {} processed item {}", t, i);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
    let enqueued = start.elapsed();

    logger.close();
    let drained = start.elapsed();

    let metrics = logger.metrics();
    println!("Enqueued 40000 lines in {:?}", enqueued);
    println!("All lines written after {:?}", drained);
    println!("Lines written: {}", metrics.lines_written());
    println!("Times a producer waited on a full channel: {}", metrics.backpressure_events());
    println!("Log file: {}", path.display());

    Ok(())
}
