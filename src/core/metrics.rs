//! Logger metrics for observability
//!
//! Write failures never reach the code that logged the line, so these
//! counters are the only way to see that a sink is misbehaving.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared between a logger and its writer
///
/// # Example
///
/// ```
/// use nblogger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the sink successfully
    lines_written: AtomicU64,

    /// Lines the sink rejected or panicked on
    write_failures: AtomicU64,

    /// Enqueues that found the channel full and had to wait
    backpressure_events: AtomicU64,

    /// Calls made after the logger was closed
    dropped_after_close: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            backpressure_events: AtomicU64::new(0),
            dropped_after_close: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backpressure_events(&self) -> u64 {
        self.backpressure_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_after_close(&self) -> u64 {
        self.dropped_after_close.load(Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_backpressure(&self) -> u64 {
        self.backpressure_events.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped_after_close(&self) -> u64 {
        self.dropped_after_close.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.backpressure_events.store(0, Ordering::Relaxed);
        self.dropped_after_close.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            backpressure_events: AtomicU64::new(self.backpressure_events()),
            dropped_after_close: AtomicU64::new(self.dropped_after_close()),
        }
    }
}
