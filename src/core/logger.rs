//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    flags::LogFlags,
    formatter::{CallSite, LineFormatter},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    sink::Sink,
    worker::{flush_sink, write_record, DeliveryState, StateCell, WriterWorker},
};
use crate::sinks::{FileSink, StdoutSink, TeeSink};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Default capacity of the delivery channel
pub const DEFAULT_CAPACITY: usize = 1024;

enum Delivery {
    /// Caller writes inline under the mutex; `None` once closed.
    Blocking(Mutex<Option<Box<dyn Sink>>>),
    /// Caller enqueues; the worker owns the sink.
    Queued(WriterWorker),
}

/// Leveled logger bound to a single sink.
///
/// Without [`LogFlags::BLOCKING`] every enabled call formats its line on the
/// calling thread and hands it to a dedicated writer thread through a
/// bounded channel. Calls block only while that channel is full. With
/// `BLOCKING`, the line is written before the call returns.
///
/// `Logger` is `Send + Sync`; share it between threads with `Arc`.
///
/// # Example
///
/// ```no_run
/// use nblogger::{info, LogFlags, LogLevel, Logger};
///
/// let logger = Logger::new("app.log", LogLevel::Info, 1024, LogFlags::STD | LogFlags::SHORT_FILE)?;
/// info!(logger, "listening on port {}", 8080);
/// logger.close();
/// # Ok::<(), nblogger::LoggerError>(())
/// ```
pub struct Logger {
    threshold: AtomicU8,
    formatter: LineFormatter,
    delivery: Delivery,
    /// Held shared from the final state check until the record is queued;
    /// `close` takes it exclusively, so no record lands behind `Terminate`.
    admission: RwLock<()>,
    state: StateCell,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Open `path` for appending and start a logger on it.
    ///
    /// Fails with [`LoggerError::Open`] if the file cannot be opened; no
    /// retry is attempted.
    pub fn new(
        path: impl AsRef<Path>,
        level: LogLevel,
        capacity: usize,
        flags: LogFlags,
    ) -> Result<Self> {
        let sink = FileSink::open(path)?;
        Self::with_sink(sink, level, capacity, flags)
    }

    /// Start a logger on a caller-supplied sink.
    ///
    /// [`LogFlags::STDOUT`] tees `sink` with standard output.
    /// `capacity` is ignored in blocking mode.
    pub fn with_sink(
        sink: impl Sink + 'static,
        level: LogLevel,
        capacity: usize,
        flags: LogFlags,
    ) -> Result<Self> {
        let sink: Box<dyn Sink> = if flags.contains(LogFlags::STDOUT) {
            Box::new(TeeSink::new(vec![Box::new(sink), Box::new(StdoutSink::new())]))
        } else {
            Box::new(sink)
        };

        let metrics = Arc::new(LoggerMetrics::new());
        let delivery = if flags.is_blocking() {
            Delivery::Blocking(Mutex::new(Some(sink)))
        } else {
            Delivery::Queued(WriterWorker::spawn(sink, capacity, Arc::clone(&metrics))?)
        };

        Ok(Self {
            threshold: AtomicU8::new(level.as_u8()),
            formatter: LineFormatter::new(flags),
            delivery,
            admission: RwLock::new(()),
            state: StateCell::new(),
            metrics,
        })
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Whether a call at `level` would currently be written.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        LogLevel::admits(self.log_level(), level)
    }

    pub fn flags(&self) -> LogFlags {
        self.formatter.flags()
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self.delivery, Delivery::Blocking(_))
    }

    /// Channel capacity, or `None` in blocking mode.
    pub fn capacity(&self) -> Option<usize> {
        match &self.delivery {
            Delivery::Queued(worker) => Some(worker.capacity()),
            Delivery::Blocking(_) => None,
        }
    }

    pub fn state(&self) -> DeliveryState {
        self.state.get()
    }

    /// Write and failure counters for this logger.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log `message` at `level`.
    ///
    /// Disabled levels return after a single comparison: no clock read, no
    /// call-site capture, no formatting.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        if self.state.get() != DeliveryState::Active {
            self.metrics.record_dropped_after_close();
            return;
        }

        let call_site = if self.formatter.flags().has_call_site() {
            Some(CallSite::caller())
        } else {
            None
        };
        let now = Local::now();
        let line = self.formatter.format(level, &now, call_site, message);

        // Re-check under the gate: `close` may have started while formatting.
        let _admitted = self.admission.read();
        if self.state.get() != DeliveryState::Active {
            self.metrics.record_dropped_after_close();
            return;
        }
        self.deliver(LogRecord::new(level, line));
    }

    fn deliver(&self, record: LogRecord) {
        match &self.delivery {
            Delivery::Queued(worker) => {
                if !worker.enqueue(record, &self.metrics) {
                    self.metrics.record_dropped_after_close();
                }
            }
            Delivery::Blocking(sink) => {
                let mut sink = sink.lock();
                match sink.as_mut() {
                    Some(sink) => write_record(&mut **sink, &record, &self.metrics),
                    None => {
                        self.metrics.record_dropped_after_close();
                    }
                }
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Stop accepting records and wait until everything queued so far has
    /// been written.
    ///
    /// In asynchronous mode this enqueues a terminate command behind all
    /// pending records and joins the writer thread. In blocking mode it
    /// flushes and releases the sink. There is no timeout: a stalled sink
    /// stalls `close`.
    ///
    /// Closing twice is a no-op; a concurrent second call returns once the
    /// first has finished. Calls made after `close` are dropped and counted
    /// in [`LoggerMetrics::dropped_after_close`].
    pub fn close(&self) {
        {
            let _closing = self.admission.write();
            self.state.advance(DeliveryState::Draining);
        }

        match &self.delivery {
            Delivery::Queued(worker) => worker.shutdown(),
            Delivery::Blocking(sink) => {
                let mut sink = sink.lock();
                if let Some(mut sink) = sink.take() {
                    flush_sink(&mut *sink);
                }
            }
        }

        self.state.advance(DeliveryState::Stopped);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.log_level())
            .field("flags", &self.flags())
            .field("capacity", &self.capacity())
            .field("state", &self.state())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Exactly one destination must be given: a file path or a custom sink.
///
/// # Example
/// ```no_run
/// use nblogger::prelude::*;
///
/// let logger = Logger::builder()
///     .path("service.log")
///     .level(LogLevel::Debug)
///     .capacity(4096)
///     .flags(LogFlags::STD | LogFlags::MICROSECONDS)
///     .build()?;
/// # Ok::<(), nblogger::LoggerError>(())
/// ```
pub struct LoggerBuilder {
    path: Option<PathBuf>,
    sink: Option<Box<dyn Sink>>,
    level: LogLevel,
    capacity: usize,
    flags: LogFlags,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            path: None,
            sink: None,
            level: LogLevel::Info,
            capacity: DEFAULT_CAPACITY,
            flags: LogFlags::STD,
        }
    }

    /// Log to a file opened for appending
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Log to a custom sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the initial severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the delivery channel capacity
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the flags
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Switch to blocking (synchronous) delivery
    #[must_use = "builder methods return a new value"]
    pub fn blocking(mut self) -> Self {
        self.flags |= LogFlags::BLOCKING;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        match (self.path, self.sink) {
            (Some(path), None) => Logger::new(path, self.level, self.capacity, self.flags),
            (None, Some(sink)) => Logger::with_sink(sink, self.level, self.capacity, self.flags),
            (None, None) => Err(LoggerError::config(
                "LoggerBuilder",
                "no destination: set either a path or a sink",
            )),
            (Some(_), Some(_)) => Err(LoggerError::config(
                "LoggerBuilder",
                "both a path and a sink were given",
            )),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct MemorySink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl MemorySink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Sink for MemorySink {
        fn write(&mut self, line: &[u8]) -> Result<()> {
            self.lines
                .lock()
                .push(String::from_utf8_lossy(line).into_owned());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "memory"
        }
    }

    #[test]
    fn test_builder_requires_destination() {
        let result = Logger::builder().build();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_two_destinations() {
        let result = Logger::builder()
            .path("unused.log")
            .sink(MemorySink::default())
            .build();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_builder_blocking_mode() {
        let logger = Logger::builder()
            .sink(MemorySink::default())
            .blocking()
            .build()
            .expect("build logger");

        assert!(logger.is_blocking());
        assert_eq!(logger.capacity(), None);
        assert_eq!(logger.log_level(), LogLevel::Info);
    }

    #[test]
    fn test_builder_async_mode() {
        let logger = Logger::builder()
            .sink(MemorySink::default())
            .capacity(16)
            .level(LogLevel::Trace)
            .build()
            .expect("build logger");

        assert!(!logger.is_blocking());
        assert_eq!(logger.capacity(), Some(16));
        assert_eq!(logger.log_level(), LogLevel::Trace);
        assert_eq!(logger.state(), DeliveryState::Active);
    }

    #[test]
    fn test_threshold_scenario() {
        let sink = MemorySink::default();
        let logger = Logger::with_sink(sink.clone(), LogLevel::Warn, 8, LogFlags::empty())
            .expect("build logger");

        logger.trace("a");
        logger.error("b");
        logger.close();

        assert_eq!(sink.lines(), vec!["[ERROR] b\n".to_string()]);
    }

    #[test]
    fn test_set_log_level_takes_effect() {
        let sink = MemorySink::default();
        let logger = Logger::with_sink(
            sink.clone(),
            LogLevel::Error,
            8,
            LogFlags::BLOCKING,
        )
        .expect("build logger");

        logger.info("hidden");
        logger.set_log_level(LogLevel::Debug);
        assert_eq!(logger.log_level(), LogLevel::Debug);
        assert!(logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Trace));
        logger.debug("shown");

        assert_eq!(sink.lines(), vec!["[DEBUG] shown\n".to_string()]);
    }

    #[test]
    fn test_call_site_is_the_caller() {
        let sink = MemorySink::default();
        let logger = Logger::with_sink(
            sink.clone(),
            LogLevel::Trace,
            8,
            LogFlags::SHORT_FILE | LogFlags::BLOCKING,
        )
        .expect("build logger");

        logger.warn("here");
        let line = line!() - 1;

        assert_eq!(sink.lines(), vec![format!("[WARN]  logger.rs:{}: here\n", line)]);
    }

    #[test]
    fn test_close_is_idempotent_and_drops_later_calls() {
        let sink = MemorySink::default();
        let logger =
            Logger::with_sink(sink.clone(), LogLevel::Info, 4, LogFlags::empty())
                .expect("build logger");

        logger.info("before");
        logger.close();
        assert_eq!(logger.state(), DeliveryState::Stopped);
        logger.close();

        logger.info("after");
        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(sink.lines(), vec!["[INFO]  before\n".to_string()]);
        assert_eq!(logger.metrics().dropped_after_close(), 1);
        assert_eq!(logger.metrics().lines_written(), 1);
    }

    #[test]
    fn test_blocking_close_releases_sink() {
        let sink = MemorySink::default();
        let logger = Logger::with_sink(sink.clone(), LogLevel::Info, 0, LogFlags::BLOCKING)
            .expect("build logger");

        logger.info("kept");
        logger.close();
        logger.info("dropped");

        assert_eq!(sink.lines(), vec!["[INFO]  kept\n".to_string()]);
        assert_eq!(logger.metrics().dropped_after_close(), 1);
    }

    #[test]
    fn test_drop_flushes_pending_records() {
        let sink = MemorySink::default();
        {
            let logger = Logger::with_sink(sink.clone(), LogLevel::Info, 64, LogFlags::empty())
                .expect("build logger");
            for i in 0..50 {
                logger.info(format_args!("record {}", i));
            }
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 50);
        assert_eq!(lines[49], "[INFO]  record 49\n");
    }
}
