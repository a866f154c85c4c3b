//! Registry usage example
//!
//! Demonstrates the main logger, named loggers and the fallback chain.
//!
//! Run with: cargo run --example registry_usage

use rust_logger_registry::prelude::*;
use rust_logger_registry::info;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Logger Registry - Usage Example ===\n");

    let registry = Arc::new(LoggerRegistry::new());

    println!("1. Nothing configured yet, the default main logger is created:");
    registry.logger(None).debug("Hello from the default logger");

    println!("\n2. Loading a main configuration at INFO:");
    registry.load_configuration(None, LoggerConfiguration::new(LogLevel::Info))?;
    let main = registry.logger(None);
    main.debug("Debug message (hidden)");
    main.info("Info message (visible)");

    println!("\n3. A named logger at DEBUG:");
    registry.load_configuration(Some("db"), LoggerConfiguration::new(LogLevel::Debug))?;
    let db = registry.logger(Some("db"));
    info!(db, "Connected to {} in {}ms", "postgres", 12);
    db.debug("Pool size: 8");

    println!("\n4. Unknown names fall back to the main logger:");
    registry.logger(Some("cache")).warn("Logged through MAIN");

    println!("\n5. A file name without a log directory is rejected:");
    let invalid = LoggerConfiguration {
        level: LogLevel::Info,
        log_dir: None,
        filename: Some("broken.log".to_string()),
    };
    if let Err(e) = registry.load_configuration(Some("broken"), invalid) {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
