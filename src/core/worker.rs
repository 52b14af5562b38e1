//! Delivery channel and the background writer thread
//!
//! Callers hand formatted records to a bounded crossbeam channel. A single
//! writer thread owns the sink and drains the channel in FIFO order until it
//! receives [`Command::Terminate`]. When the channel is full, callers block
//! until the writer catches up; nothing is dropped.

use super::{
    error::Result,
    log_record::{Command, LogRecord},
    metrics::LoggerMetrics,
    sink::Sink,
};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Lifecycle of a logger's delivery subsystem. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeliveryState {
    Active = 0,
    Draining = 1,
    Stopped = 2,
}

#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) const fn new() -> Self {
        Self(AtomicU8::new(DeliveryState::Active as u8))
    }

    pub(crate) fn get(&self) -> DeliveryState {
        match self.0.load(Ordering::Acquire) {
            0 => DeliveryState::Active,
            1 => DeliveryState::Draining,
            _ => DeliveryState::Stopped,
        }
    }

    /// Move to `state` unless the cell is already past it.
    pub(crate) fn advance(&self, state: DeliveryState) {
        self.0.fetch_max(state as u8, Ordering::AcqRel);
    }
}

/// Write one record, absorbing sink errors and panics.
///
/// Failures are counted in `metrics` and reported on stderr for the first
/// occurrence and every 1000th after that. They never reach the caller.
pub(crate) fn write_record(sink: &mut dyn Sink, record: &LogRecord, metrics: &LoggerMetrics) {
    let result =
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write(record.as_bytes())));

    match result {
        Ok(Ok(())) => {
            metrics.record_written();
        }
        Ok(Err(e)) => {
            let previous = metrics.record_write_failure();
            if should_report(previous) {
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed to write ({} failures so far): {}",
                    sink.name(),
                    previous + 1,
                    e
                );
            }
        }
        Err(panic_info) => {
            let previous = metrics.record_write_failure();
            if should_report(previous) {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked during write: {}",
                    sink.name(),
                    panic_message(&*panic_info)
                );
            }
        }
    }
}

pub(crate) fn flush_sink(sink: &mut dyn Sink) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.flush()));
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.name(), e),
        Err(panic_info) => eprintln!(
            "[LOGGER CRITICAL] Sink '{}' panicked during flush: {}",
            sink.name(),
            panic_message(&*panic_info)
        ),
    }
}

fn should_report(previous_failures: u64) -> bool {
    previous_failures == 0 || (previous_failures + 1) % 1000 == 0
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Sending half of the delivery channel plus the writer thread it feeds.
pub(crate) struct WriterWorker {
    sender: Sender<Command>,
    handle: Mutex<Option<JoinHandle<()>>>,
    capacity: usize,
}

impl WriterWorker {
    /// Start the single writer thread for `sink`.
    pub(crate) fn spawn(
        sink: Box<dyn Sink>,
        capacity: usize,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<Self> {
        let (sender, receiver) = bounded(capacity);

        let handle = thread::Builder::new()
            .name(format!("nblogger-{}", sink.name()))
            .spawn(move || Self::run(sink, receiver, metrics))?;

        Ok(Self {
            sender,
            handle: Mutex::new(Some(handle)),
            capacity,
        })
    }

    fn run(mut sink: Box<dyn Sink>, receiver: Receiver<Command>, metrics: Arc<LoggerMetrics>) {
        // Terminate and a disconnected channel both end the loop.
        while let Ok(Command::Write(record)) = receiver.recv() {
            write_record(&mut *sink, &record, &metrics);

            // Push buffered sinks out whenever the queue runs dry.
            if receiver.is_empty() {
                flush_sink(&mut *sink);
            }
        }

        flush_sink(&mut *sink);

        // Anything queued behind Terminate is discarded, not written.
        while let Ok(command) = receiver.try_recv() {
            if let Command::Write(_) = command {
                metrics.record_dropped_after_close();
            }
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Queue a record, blocking while the channel is full.
    ///
    /// Returns `false` if the writer has already exited.
    pub(crate) fn enqueue(&self, record: LogRecord, metrics: &LoggerMetrics) -> bool {
        match self.sender.try_send(Command::Write(record)) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                metrics.record_backpressure();
                self.sender.send(command).is_ok()
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Queue `Terminate` behind everything already sent and wait for the
    /// writer to exit.
    ///
    /// Concurrent and repeated calls wait for the first one to finish and
    /// then return.
    pub(crate) fn shutdown(&self) {
        let mut handle = self.handle.lock();

        if let Some(handle) = handle.take() {
            // A send error means the writer is already gone; joining still
            // reaps it.
            let _ = self.sender.send(Command::Terminate);

            if let Err(e) = handle.join() {
                eprintln!(
                    "[LOGGER ERROR] Writer thread panicked during shutdown: {}",
                    panic_message(&*e)
                );
            }
        }
    }
}
