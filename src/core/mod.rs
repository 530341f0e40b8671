//! Core logger types and traits

pub mod decorator;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod template;

pub use decorator::CallDecorator;
pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::Sink;
pub use template::{DEFAULT_DATETIME_FORMAT, DEFAULT_TEMPLATE};
