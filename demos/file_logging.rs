//! File logging example
//!
//! Demonstrates the file sink and multi-sink fan-out.
//!
//! Run with: cargo run --example file_logging

use sweetlog::prelude::*;

fn main() -> Result<()> {
    println!("=== sweetlog - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("sweetlog_example.log");

    // Fan out to the console and a file at the same time
    let logger = Logger::builder()
        .min_level(Level::Info)
        .sink(ConsoleSink::new())
        .sink(FileSink::new(&log_path))
        .build();

    println!("{}\n", logger);

    logger.info("Application started")?;
    logger.warning("Disk usage at 85%")?;
    logger.error("Failed to reach upstream, retrying")?;

    let content = std::fs::read_to_string(&log_path)?;
    println!(
        "\nWrote {} lines to {}",
        content.lines().count(),
        log_path.display()
    );

    std::fs::remove_file(&log_path)?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
