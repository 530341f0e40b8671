//! Sink trait for log output destinations
//!
//! A sink receives fully formatted log text from the [`Logger`](crate::Logger)
//! and commits it to its medium. Sinks must not add their own framing or
//! trailing newline; the Logger appends the newline before fan-out.

use super::error::Result;

pub trait Sink: Send + Sync {
    /// Append `text` to the sink's medium, exactly as given.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Force buffered data to the medium. No-op for unbuffered sinks.
    fn flush(&mut self) -> Result<()>;

    /// Short diagnostic name, used by the Logger's `Display` impl.
    fn name(&self) -> &str;
}
