//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Sink that appends to a file, opening and closing it on every write.
///
/// No handle is held between calls: each `write` opens the file in
/// append-or-create mode, writes the text and closes it on all exit paths.
/// Every message pays the file-open cost; this trades throughput for
/// simplicity and is intentional. `flush` is a no-op because each write
/// fully commits before returning.
///
/// The path is not touched at construction; a bad path surfaces as an
/// error on the first write.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation("opening", self.path.display().to_string(), e)
            })?;

        file.write_all(text.as_bytes())
            .map_err(|e| LoggerError::io_operation("appending to", self.path.display().to_string(), e))
        // file closed here, write failure included
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
