//! Sink trait for log output destinations

use super::error::Result;

/// Byte-oriented destination for finished lines.
///
/// A sink is owned by exactly one logger. In asynchronous mode it is moved
/// into the writer thread, so implementations only need `Send`.
pub trait Sink: Send {
    /// Write one complete line, including its trailing newline.
    fn write(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        (**self).write(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
