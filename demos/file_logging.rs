//! File logging example
//!
//! Registers a daily rotating file logger next to a console main logger.
//!
//! Run with: cargo run --example file_logging

use rust_logger_registry::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Logger Registry - File Logging Example ===\n");

    let registry = LoggerRegistry::new();
    registry.load_configuration(None, LoggerConfiguration::new(LogLevel::Info))?;
    registry.load_configuration_json(
        Some("service"),
        r#"{"level": "debug", "logDir": "logs", "filename": "service.log"}"#,
    )?;

    let service = registry.logger(Some("service"));
    service.info("Service started");
    service.debug("Loading configuration...");
    for i in 1..=5 {
        service.info(format!("Processing item {}/5", i));
    }
    service.warn("Item 3 took longer than expected");
    service.flush()?;

    registry.logger(None).info("Main logger still writes to the console");

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/service.log.<date>' for the file output");

    Ok(())
}
