//! Basic logger usage example
//!
//! Demonstrates level filtering, quiet mode, a file sink and a callback sink.
//!
//! Run with: cargo run --example basic_usage

use sinklog::prelude::*;
use sinklog::{debug, error, fatal, info, trace, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== sinklog - Basic Usage Example ===\n");

    let mut logger = Logger::builder()
        .console(ConsoleSink::stdout().with_location_style(LocationStyle::aligned()))
        .locking()
        .build()?;

    let log_path = std::env::temp_dir().join("sinklog_basic_usage.log");
    logger.add_sink(FileSink::open(&log_path)?, LogLevel::Warn)?;

    let errors = Arc::new(AtomicUsize::new(0));
    logger.add_callback(
        |_, errors: &Arc<AtomicUsize>| {
            errors.fetch_add(1, Ordering::Relaxed);
        },
        Arc::clone(&errors),
        LogLevel::Error,
    )?;

    println!("1. Logging at different levels:");
    trace!(logger, "This is a trace message");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    fatal!(logger, "This is a fatal message");

    println!("\n2. Minimum level set to INFO - trace and debug won't show:");
    logger.set_min_level(LogLevel::Info);
    trace!(logger, "Trace message (hidden)");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible)");

    println!("\n3. Quiet mode - console silent, file still written:");
    logger.set_quiet(true);
    error!(logger, "Error code: {}", 500);
    logger.set_quiet(false);

    println!(
        "\nErrors counted by callback sink: {}",
        errors.load(Ordering::Relaxed)
    );
    println!("WARN and above were also written to {}", log_path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
