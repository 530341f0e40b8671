//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

/// Sink that writes to the process's standard output.
///
/// The text arrives fully formatted from the logger, so this sink writes it
/// verbatim; stdout is locked for the duration of each write.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
