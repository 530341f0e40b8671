//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! a [`Logger::write`](crate::Logger::write) call and therefore evaluates
//! to a `Result`, which the caller decides how to handle.
//!
//! # Examples
//!
//! ```
//! use sweetlog::prelude::*;
//! use sweetlog::warning;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! warning!(logger, "Low disk space").unwrap();
//!
//! // With format arguments
//! let used = 93;
//! warning!(logger, "Disk usage at {}%", used).unwrap();
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use sweetlog::prelude::*;
/// # let logger = Logger::new();
/// use sweetlog::log;
/// log!(logger, Level::Warning, "Simple message").unwrap();
/// log!(logger, Level::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write(&format!($($arg)+), $level)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use sweetlog::prelude::*;
/// # let logger = Logger::new();
/// use sweetlog::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use sweetlog::prelude::*;
/// # let logger = Logger::new();
/// use sweetlog::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use sweetlog::prelude::*;
/// # let logger = Logger::new();
/// use sweetlog::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use sweetlog::prelude::*;
/// # let logger = Logger::new();
/// use sweetlog::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use sweetlog::prelude::*;
/// # let logger = Logger::new();
/// use sweetlog::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Wrap a function call with a [`CallDecorator`](crate::CallDecorator),
/// declaring its argument names at the call site.
///
/// Each argument is bound once, rendered into the `name=value` list, and
/// passed to the target in declared order. The function name in the log
/// line comes from the call expression itself.
///
/// # Examples
///
/// ```
/// use sweetlog::prelude::*;
/// use sweetlog::log_call;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .min_level(Level::Debug)
///     .sink(sink.clone())
///     .build();
///
/// let decorator = logger.decorator();
/// let sum = log_call!(decorator, add(a = 2, b = 3)).unwrap();
/// assert_eq!(sum, 5);
/// assert!(sink.contents().contains("Calling add(a=2, b=3) -> 5"));
/// ```
#[macro_export]
macro_rules! log_call {
    ($decorator:expr, $function:ident ( $($name:ident = $value:expr),* $(,)? )) => {{
        $(let $name = $value;)*
        let arguments: ::std::vec::Vec<(::std::string::String, ::std::string::String)> = vec![
            $((
                ::std::string::String::from(stringify!($name)),
                ::std::string::ToString::to_string(&$name),
            )),*
        ];
        $decorator.call(stringify!($function), &arguments, move || $function($($name),*))
    }};
}
