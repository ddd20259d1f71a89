//! File logging example
//!
//! Demonstrates an append-mode file destination, a trimmed field sequence,
//! a custom separator, and the close-before-exit contract.
//!
//! Run with: cargo run --example file_logging

use fieldlog::prelude::*;

fn main() {
    println!("=== Fieldlog - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("fieldlog_example.log");
    println!("Writing to: {}", log_path.display());

    let config = Config::new()
        .with_logfile(&log_path)
        .with_separator(" | ")
        .with_time_format("%Y-%m-%d %H:%M:%S")
        .with_fields(vec![
            FieldKind::Timestamp,
            FieldKind::Level,
            FieldKind::ProcessId,
            FieldKind::Message,
            FieldKind::FileName,
        ]);
    let logger = Logger::new(config);

    logger.info("file destination opened");
    logger.warning("disk usage above 80%");
    logger.error("failed to reach upstream");

    // flush and release the handle before exit; buffered bytes would be
    // lost otherwise
    logger.close().expect("close log file");

    let content = std::fs::read_to_string(&log_path).expect("read log file");
    println!("\nLog file contents:\n{}", content);

    println!("=== Example completed successfully! ===");
}
