//! Call-logging decorator
//!
//! Wraps a function call so that its invocation, arguments and return value
//! are emitted through a [`Logger`]. Rust offers no runtime signature
//! reflection, so the wrap site declares the argument names and values
//! explicitly; the [`log_call!`](crate::log_call) macro generates that
//! declaration from the call expression itself.

use super::{error::Result, level::Level, logger::Logger};
use std::fmt;

/// Configuration for logging a wrapped function call.
///
/// Obtained from [`Logger::decorator`]. By default logs at
/// [`Level::Debug`] with both arguments and return value included.
///
/// # Example
/// ```
/// use sweetlog::prelude::*;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let logger = Logger::builder()
///     .min_level(Level::Debug)
///     .sink(MemorySink::new())
///     .build();
///
/// let decorator = logger.decorator();
/// let sum = decorator
///     .call("add", &[("a".into(), "2".into()), ("b".into(), "3".into())], || add(2, 3))
///     .unwrap();
/// assert_eq!(sum, 5);
/// ```
pub struct CallDecorator<'a> {
    logger: &'a Logger,
    level: Level,
    log_arguments: bool,
    log_return: bool,
}

impl Logger {
    /// Create a call decorator bound to this logger.
    #[must_use]
    pub fn decorator(&self) -> CallDecorator<'_> {
        CallDecorator {
            logger: self,
            level: Level::Debug,
            log_arguments: true,
            log_return: true,
        }
    }
}

impl<'a> CallDecorator<'a> {
    /// Set the level the call line is emitted at
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Include the argument list in the call line
    #[must_use = "builder methods return a new value"]
    pub fn log_arguments(mut self, log_arguments: bool) -> Self {
        self.log_arguments = log_arguments;
        self
    }

    /// Include the return value in the call line
    #[must_use = "builder methods return a new value"]
    pub fn log_return(mut self, log_return: bool) -> Self {
        self.log_return = log_return;
        self
    }

    /// Invoke `function`, logging the call.
    ///
    /// The message starts with `"Calling"`, followed by either
    /// `name(arg=value, ...)` in declared order or just the name. The
    /// result type must implement `Display`; its string form is what the
    /// `-> ` suffix carries.
    ///
    /// With `log_return` on, the function runs first and the line gains a
    /// `-> result` suffix before being emitted. With it off, the line is
    /// emitted strictly before the function runs. The ordering difference
    /// is deliberate and observable; note that in the second mode a sink
    /// failure means the function is never invoked.
    pub fn call<R: fmt::Display>(
        &self,
        function_name: &str,
        arguments: &[(String, String)],
        function: impl FnOnce() -> R,
    ) -> Result<R> {
        let mut message = String::from("Calling ");
        if self.log_arguments {
            let rendered: Vec<String> = arguments
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            message.push_str(&format!("{}({})", function_name, rendered.join(", ")));
        } else {
            message.push_str(function_name);
        }

        if self.log_return {
            let result = function();
            message.push_str(&format!(" -> {}", result));
            self.logger.write(&message, self.level)?;
            Ok(result)
        } else {
            self.logger.write(&message, self.level)?;
            Ok(function())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::cell::Cell;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn debug_logger(sink: &MemorySink) -> Logger {
        Logger::builder()
            .min_level(Level::Debug)
            .sink(sink.clone())
            .template("{level_string} {message}")
            .build()
    }

    fn args(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_call_with_arguments_and_return() {
        let sink = MemorySink::new();
        let logger = debug_logger(&sink);

        let result = logger
            .decorator()
            .call("add", &args(&[("a", "2"), ("b", "3")]), || add(2, 3))
            .expect("call");

        assert_eq!(result, 5);
        assert_eq!(sink.contents(), "DEBUG Calling add(a=2, b=3) -> 5\n");
    }

    #[test]
    fn test_call_without_arguments_or_return() {
        let sink = MemorySink::new();
        let logger = debug_logger(&sink);

        let result = logger
            .decorator()
            .log_arguments(false)
            .log_return(false)
            .call("add", &args(&[("a", "2"), ("b", "3")]), || add(2, 3))
            .expect("call");

        assert_eq!(result, 5);
        assert_eq!(sink.contents(), "DEBUG Calling add\n");
    }

    #[test]
    fn test_log_before_invocation_when_return_not_logged() {
        let sink = MemorySink::new();
        let logger = debug_logger(&sink);
        let invoked = Cell::new(false);

        logger
            .decorator()
            .log_return(false)
            .call("probe", &[], || {
                // The line must already be in the sink before the target runs.
                assert!(!sink.contents().is_empty());
                invoked.set(true);
                0
            })
            .expect("call");
        assert!(invoked.get());
    }

    #[test]
    fn test_log_after_invocation_when_return_logged() {
        let sink = MemorySink::new();
        let logger = debug_logger(&sink);

        logger
            .decorator()
            .call("probe", &[], || {
                assert!(sink.contents().is_empty());
                7
            })
            .expect("call");

        assert!(sink.contents().contains("-> 7"));
    }

    #[test]
    fn test_custom_level_respects_threshold() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .min_level(Level::Warning)
            .sink(sink.clone())
            .build();

        // Default Debug level is below the threshold: call runs, line dropped.
        let result = logger
            .decorator()
            .call("add", &args(&[("a", "1"), ("b", "1")]), || add(1, 1))
            .expect("call");
        assert_eq!(result, 2);
        assert!(sink.contents().is_empty());

        let result = logger
            .decorator()
            .level(Level::Error)
            .call("add", &args(&[("a", "1"), ("b", "1")]), || add(1, 1))
            .expect("call");
        assert_eq!(result, 2);
        assert!(sink.contents().contains("Calling add(a=1, b=1) -> 2"));
    }
}
