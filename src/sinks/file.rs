//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only file destination.
///
/// Each line is handed to the OS in a single `write_all`, so nothing is held
/// in user space between writes.
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending, creating it if missing. Existing content is
    /// never truncated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::open(&path, e))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, line: &[u8]) -> Result<()> {
        self.file.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
