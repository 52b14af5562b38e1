//! Standard output sink implementation

use crate::core::{Result, Sink};
use std::io::{self, Write};

/// Writes every line to the process's standard output.
///
/// The stdout lock is taken per line so lines from different loggers do not
/// interleave mid-line.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        io::stdout().lock().write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
