//! Basic usage example
//!
//! Demonstrates console logging at every severity and switching between
//! the delimited and JSON output forms.
//!
//! Run with: cargo run --example basic_usage

use fieldlog::prelude::*;

fn main() {
    println!("=== Fieldlog - Basic Usage Example ===\n");

    let mut logger = Logger::new(Config::default());

    println!("1. Logging at different levels:");
    logger.debug("this is a debug message");
    logger.info("this is an info message");
    logger.warning("this is a warning message");
    logger.error("this is an error message");
    logger.fatal("this is a fatal message");

    println!("\n2. Muting debug output:");
    logger.mute_debug();
    logger.debug("debug message (hidden)");
    logger.info("info message (still visible)");
    logger.unmute_debug();

    println!("\n3. Variadic messages join with single spaces:");
    let port = 8080;
    fieldlog::info!(logger, "listening on port", port);

    println!("\n4. Switching to JSON output:");
    logger.set_output_format(OutputFormat::Json);
    logger.info("same record, structured form");

    println!("\n=== Example completed successfully! ===");
}
