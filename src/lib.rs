// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented configuration files and a small leveled logger.
//!
//! This crate bundles the two pieces of plumbing most long-running programs
//! want first: a thread-safe store for `key = value` configuration files
//! with optional `[section]` grouping, and a logger with three severities
//! that writes timestamped lines to any sink.
//!
//! # Architecture
//!
//! The crate is layered:
//!
//! - **Domain Layer**: Core types and the line grammar (`ConfigValue`, `Line`, errors)
//! - **Store**: The thread-safe section/key store, file loading, and the process-wide default store
//! - **Logger**: The leveled logger, its process-wide default, and the `clap` flag helper
//!
//! # Features
//!
//! - **One Format**: Blank lines, `#` comments, `[section]` headers, `key = value` pairs
//! - **Type Safety**: Type-safe conversions from string values to Rust types
//! - **Additive Loading**: Layer any number of files and strings into one store, last write wins
//! - **Injectable or Global**: Every capability works on an instance; process-wide defaults are a convenience
//! - **Leveled Logging**: `ERROR`, `INFO`, `DEBUG` thresholds with immediate, serialized writes
//!
//! # Feature Flags
//!
//! - `cli`: Enable the `clap` log-level flag helper (default)
//!
//! # Quick Start
//!
//! ```rust
//! use lineconf::prelude::*;
//!
//! # fn main() -> lineconf::domain::Result<()> {
//! let config = Config::new();
//! config.parse_str("[server]\nhost = localhost\nport = 8080 # tcp\n")?;
//!
//! assert_eq!(config.get_string("server", "host")?, "localhost");
//! assert_eq!(config.get_int("server", "port")?, 8080);
//!
//! let log = Logger::new();
//! log.error("only errors pass the default threshold");
//! log.set_level(Level::Debug);
//! log.debug("now everything is emitted");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod logger;
pub mod store;

/// Commonly used types.
///
/// This module re-exports the most commonly used types for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigValue, Line, Result};
    pub use crate::logger::{BadLevelError, Level, Logger};
    pub use crate::store::{Config, DEFAULT_SECTION};
}
