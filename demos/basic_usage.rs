//! Basic logger usage example
//!
//! Demonstrates leveled logging to the console with different thresholds.
//!
//! Run with: cargo run --example basic_usage

use sweetlog::prelude::*;

fn main() -> Result<()> {
    println!("=== sweetlog - Basic Usage Example ===\n");

    // Default logger: console sink, WARNING threshold
    let logger = Logger::new();
    println!("{}", logger);

    println!("\n1. Default threshold (WARNING) - debug and info are dropped:");
    logger.debug("This debug message is hidden")?;
    logger.info("This info message is hidden")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;

    println!("\n2. Lowered threshold - everything shows:");
    logger.set_min_level(Level::Debug);
    for level in Level::all() {
        logger.write(&format!("Message at {}", level), level)?;
    }

    println!("\n3. Custom template and timestamp format:");
    let custom = Logger::builder()
        .min_level(Level::Info)
        .sink(ConsoleSink::new())
        .datetime_format("%H:%M:%S")
        .template("{datetime_string} | {level_string} | {message}")
        .build();
    custom.info("Compact line format")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
