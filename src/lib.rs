//! # sweetlog
//!
//! A minimal leveled logging library: a [`Logger`] filters messages by
//! severity, formats them with a timestamp, and fans them out to one or
//! more [`Sink`]s, plus a decorator that logs function calls and return
//! values.
//!
//! ## Features
//!
//! - **Leveled filtering**: five ordered severities with a per-logger
//!   threshold
//! - **Pluggable sinks**: console, file, and in-memory sinks included; any
//!   type implementing [`Sink`] plugs in
//! - **Configurable formatting**: strftime timestamps and a message
//!   template with named placeholders
//! - **Call logging**: wrap a function so its arguments and return value
//!   are logged around its execution
//!
//! Everything runs synchronously on the calling thread, and sink failures
//! propagate to the caller unmodified.
//!
//! ```
//! use sweetlog::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .min_level(Level::Info)
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.warning("disk usage high").unwrap();
//! assert!(sink.contents().contains("[WARNING] disk usage high"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallDecorator, Level, Logger, LoggerBuilder, LoggerError, Result, Sink,
        DEFAULT_DATETIME_FORMAT, DEFAULT_TEMPLATE,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use crate::core::{
    CallDecorator, Level, Logger, LoggerBuilder, LoggerError, Result, Sink,
    DEFAULT_DATETIME_FORMAT, DEFAULT_TEMPLATE,
};
pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
