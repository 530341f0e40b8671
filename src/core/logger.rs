//! Main logger implementation

use super::{
    error::Result,
    level::Level,
    sink::Sink,
    template::{self, DEFAULT_DATETIME_FORMAT, DEFAULT_TEMPLATE},
};
use crate::sinks::ConsoleSink;
use chrono::Local;
use parking_lot::RwLock;
use std::fmt;

/// Leveled logger that formats messages and fans them out to sinks.
///
/// Each `write` runs inline on the calling thread: capture the timestamp,
/// render the template, then call `write` and `flush` on every sink in list
/// order. There is no internal queue and no background worker. A sink
/// failure aborts delivery to the remaining sinks and propagates to the
/// caller unmodified.
pub struct Logger {
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    min_level: RwLock<Level>,
    datetime_format: String,
    template: String,
}

impl Logger {
    /// Create a logger with one console sink, threshold [`Level::Warning`]
    /// and the default formats.
    ///
    /// The default sink list is built fresh for each instance; nothing is
    /// shared across loggers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(vec![Box::new(ConsoleSink::new()) as Box<dyn Sink>]),
            min_level: RwLock::new(Level::Warning),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use sweetlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(Level::Debug)
    ///     .sink(ConsoleSink::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        let mut sinks = self.sinks.write();
        sinks.push(sink);
    }

    /// Replace the entire sink list.
    ///
    /// An empty list is valid: the logger then accepts every `write` call
    /// and silently discards the message without performing any I/O.
    pub fn set_sinks(&self, sinks: Vec<Box<dyn Sink>>) {
        *self.sinks.write() = sinks;
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn set_min_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> Level {
        *self.min_level.read()
    }

    /// Format `message` and deliver it to every sink, if `level` passes the
    /// threshold.
    ///
    /// A below-threshold message is a silent no-op, not an error. Otherwise
    /// the current local timestamp is captured, the line is rendered from
    /// the configured template with a single trailing newline, and each sink
    /// receives `write` then `flush` in list order. The first sink error
    /// aborts the remaining fan-out and is returned to the caller.
    ///
    /// Formats are not validated at construction; a malformed datetime
    /// format or template surfaces here.
    pub fn write(&self, message: &str, level: Level) -> Result<()> {
        if level < *self.min_level.read() {
            return Ok(());
        }

        let datetime_string = template::format_timestamp(&self.datetime_format, &Local::now())?;
        let mut line = template::render(&self.template, &datetime_string, level.as_str(), message)?;
        line.push('\n');

        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.write(&line)?;
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: &str) -> Result<()> {
        self.write(message, Level::Debug)
    }

    #[inline]
    pub fn info(&self, message: &str) -> Result<()> {
        self.write(message, Level::Info)
    }

    #[inline]
    pub fn warning(&self, message: &str) -> Result<()> {
        self.write(message, Level::Warning)
    }

    #[inline]
    pub fn error(&self, message: &str) -> Result<()> {
        self.write(message, Level::Error)
    }

    #[inline]
    pub fn critical(&self, message: &str) -> Result<()> {
        self.write(message, Level::Critical)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks = self.sinks.read();
        let names: Vec<&str> = sinks.iter().map(|s| s.name()).collect();
        write!(
            f,
            "Logger(sinks=[{}], level={})",
            names.join(", "),
            *self.min_level.read()
        )
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Unlike [`Logger::new`], the builder starts with an empty sink list; a
/// logger built without any `sink` call discards all messages.
///
/// # Example
/// ```
/// use sweetlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::Info)
///     .sink(FileSink::new("/tmp/app.log"))
///     .datetime_format("%H:%M:%S")
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: Level,
    sinks: Vec<Box<dyn Sink>>,
    datetime_format: String,
    template: String,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Level::Warning,
            sinks: Vec::new(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Set the strftime timestamp format.
    ///
    /// Not validated here; an invalid format string errors on the first
    /// `write` that passes the threshold.
    #[must_use = "builder methods return a new value"]
    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Set the message template.
    ///
    /// Recognized placeholders: `{datetime_string}`, `{level_string}`,
    /// `{message}`. Not validated here.
    #[must_use = "builder methods return a new value"]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            sinks: RwLock::new(self.sinks),
            min_level: RwLock::new(self.min_level),
            datetime_format: self.datetime_format,
            template: self.template,
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
    use crate::sinks::MemorySink;

    #[test]
    fn test_default_logger_configuration() {
        let logger = Logger::new();
        assert_eq!(logger.min_level(), Level::Warning);
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_builder_starts_with_no_sinks() {
        let logger = Logger::builder().build();
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn test_below_threshold_is_silent_noop() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.info("filtered out").expect("write");
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_at_threshold_is_emitted() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .min_level(Level::Info)
            .sink(sink.clone())
            .build();

        logger.info("kept").expect("write");
        let contents = sink.contents();
        assert!(contents.contains("[INFO] kept"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_zero_sinks_accepts_writes() {
        let logger = Logger::builder().min_level(Level::Debug).build();
        logger.critical("nowhere to go").expect("write");
    }

    #[test]
    fn test_set_sinks_reassignment() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let logger = Logger::builder()
            .min_level(Level::Debug)
            .sink(first.clone())
            .build();

        logger.set_sinks(vec![Box::new(second.clone())]);
        logger.error("rerouted").expect("write");

        assert!(first.contents().is_empty());
        assert!(second.contents().contains("rerouted"));
    }

    #[test]
    fn test_set_min_level() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.debug("dropped").expect("write");
        logger.set_min_level(Level::Debug);
        logger.debug("kept").expect("write");

        let contents = sink.contents();
        assert!(!contents.contains("dropped"));
        assert!(contents.contains("kept"));
    }

    #[test]
    fn test_custom_template() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .min_level(Level::Debug)
            .sink(sink.clone())
            .template("{level_string}: {message}")
            .build();

        logger.warning("plain").expect("write");
        assert_eq!(sink.contents(), "WARNING: plain\n");
    }

    #[test]
    fn test_malformed_template_errors_at_write() {
        let logger = Logger::builder()
            .min_level(Level::Debug)
            .sink(MemorySink::new())
            .template("{msg}")
            .build();

        // Construction succeeded; the error only surfaces now.
        assert!(logger.info("boom").is_err());
    }

    #[test]
    fn test_malformed_datetime_format_errors_at_write() {
        let logger = Logger::builder()
            .min_level(Level::Debug)
            .sink(MemorySink::new())
            .datetime_format("%Q")
            .build();

        assert!(logger.info("boom").is_err());
    }

    #[test]
    fn test_display_names_sinks_and_level() {
        let logger = Logger::builder()
            .min_level(Level::Error)
            .sink(MemorySink::new())
            .sink(MemorySink::new())
            .build();

        assert_eq!(
            logger.to_string(),
            "Logger(sinks=[memory, memory], level=ERROR)"
        );
    }

    #[test]
    fn test_convenience_methods_use_fixed_levels() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .min_level(Level::Debug)
            .sink(sink.clone())
            .build();

        logger.debug("a").unwrap();
        logger.info("b").unwrap();
        logger.warning("c").unwrap();
        logger.error("d").unwrap();
        logger.critical("e").unwrap();

        let contents = sink.contents();
        for tag in ["[DEBUG]", "[INFO]", "[WARNING]", "[ERROR]", "[CRITICAL]"] {
            assert!(contents.contains(tag), "missing {tag}");
        }
        assert_eq!(contents.lines().count(), 5);
    }
}
