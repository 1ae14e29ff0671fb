// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leveled logging example driven by a command-line flag.
//!
//! This example demonstrates:
//! - Building the standard log-level flag with the flag helper
//! - Applying the parsed flag to the process-wide default logger
//! - Which records each threshold lets through
//! - An instance logger with its own threshold and sink
//!
//! To run this example:
//! ```bash
//! cargo run --example log_levels -- --log DEBUG
//! ```

use clap::Command;
use lineconf::logger::{self, flag, Level, Logger};

fn main() {
    let matches = Command::new("log_levels")
        .about("Emit one record per level against the chosen threshold")
        .arg(flag::level_arg("log"))
        .get_matches();

    if let Err(err) = flag::set_level_from_matches(&matches, "log") {
        logger::fatal(err);
    }

    println!("=== lineconf: Log Levels ===\n");
    println!("Default logger threshold: {}\n", logger::global().level());

    logger::error("an error record, emitted at every threshold");
    logger::info("an info record, emitted at INFO and DEBUG");
    logger::debug("a debug record, emitted only at DEBUG");

    // Instance loggers carry their own threshold and take custom labels.
    let worker = Logger::with_sink(Level::Debug, Box::new(std::io::stderr()));
    worker.log(Level::Info, "WORKER", "instance loggers write wherever their sink points");

    println!("\nTip: rerun with --log INFO or --log DEBUG to see more records.");
}
