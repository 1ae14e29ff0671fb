// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration store.
//!
//! This example demonstrates:
//! - Parsing configuration text with sections and inline comments
//! - Retrieving values with type conversions (string, int, bool, float)
//! - Telling a missing section apart from a missing key
//! - Dumping the store back out in the same format
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use lineconf::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== lineconf: Basic Usage ===\n");

    let config = Config::new();

    // Example 1: Parse configuration text
    println!("--- Example 1: Parsing ---");
    config.parse_str(
        "\
# collector settings
name = collector
workers = 4

[server]
host = 0.0.0.0
port = 9090 # exposed port
use_tls = no

[limits]
max_payload = 65536
sample_rate = 0.25
",
    )?;
    println!("✓ Parsed sections: {:?}\n", config.sections());

    // Example 2: Typed reads
    println!("--- Example 2: Typed Values ---");
    println!("name        = {}", config.get_string(DEFAULT_SECTION, "name")?);
    println!("workers     = {}", config.get_int(DEFAULT_SECTION, "workers")?);
    println!("server.host = {}", config.get_string("server", "host")?);
    println!("server.port = {}", config.get_int("server", "port")?);
    println!("use_tls     = {}", config.get_bool("server", "use_tls")?);
    println!("sample_rate = {}\n", config.get_float("limits", "sample_rate")?);

    // Example 3: Missing section versus missing key
    println!("--- Example 3: Lookup Misses ---");
    match config.get_string("cache", "size") {
        Ok(value) => println!("✓ cache.size = {}", value),
        Err(err) => println!("✗ {} (is_not_found: {})", err, err.is_not_found()),
    }
    match config.get_string("server", "backlog") {
        Ok(value) => println!("✓ server.backlog = {}", value),
        Err(err) => println!("✗ {} (is_not_found: {})\n", err, err.is_not_found()),
    }

    // Example 4: Conversion failures keep the underlying parse error
    println!("--- Example 4: Conversion Errors ---");
    config.set("server", "port", "eighty");
    match config.get_int("server", "port") {
        Ok(port) => println!("✓ port = {}", port),
        Err(err) => println!("✗ port did not convert: {}\n", err),
    }
    config.set("server", "port", "9090");

    // Example 5: Dump the store back out
    println!("--- Example 5: Serialization ---");
    let mut out = Vec::new();
    config.write_to(&mut out)?;
    print!("{}", String::from_utf8_lossy(&out));

    println!("=== Example Complete ===");
    Ok(())
}
