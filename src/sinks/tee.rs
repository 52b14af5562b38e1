//! Fan-out sink

use crate::core::{Result, Sink};

/// Writes each line to every inner sink in order.
///
/// All sinks are attempted even if an earlier one fails; the first error is
/// returned afterwards.
pub struct TeeSink {
    sinks: Vec<Box<dyn Sink>>,
    name: String,
}

impl TeeSink {
    pub fn new(sinks: Vec<Box<dyn Sink>>) -> Self {
        let name = sinks
            .iter()
            .map(|sink| sink.name())
            .collect::<Vec<_>>()
            .join("+");
        Self { sinks, name }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Sink for TeeSink {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        let mut first_error = None;
        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.write(line) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn flush(&mut self) -> Result<()> {
        let mut first_error = None;
        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
