//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;

// Re-export the trait so sink implementors need only this module
pub use crate::core::Sink;
