//! Call logging example
//!
//! Demonstrates the call decorator and the log_call! macro.
//!
//! Run with: cargo run --example call_logging

use sweetlog::log_call;
use sweetlog::prelude::*;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

fn main() -> Result<()> {
    println!("=== sweetlog - Call Logging Example ===\n");

    let logger = Logger::builder()
        .min_level(Level::Debug)
        .sink(ConsoleSink::new())
        .build();

    println!("1. Arguments and return value:");
    let decorator = logger.decorator();
    let sum = log_call!(decorator, add(a = 2, b = 3))?;
    println!("   add returned {}", sum);

    println!("\n2. Name only, logged before the call runs:");
    let bare = logger.decorator().log_arguments(false).log_return(false);
    let greeting = log_call!(bare, greet(name = "world"))?;
    println!("   greet returned {:?}", greeting);

    println!("\n3. Custom level:");
    let loud = logger.decorator().level(Level::Warning);
    log_call!(loud, add(a = 40, b = 2))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
