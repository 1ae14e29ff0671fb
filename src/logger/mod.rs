// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger layer containing the leveled logger implementations.
//!
//! This module contains the [`Logger`] type, the [`Level`] severity enum,
//! the process-wide default logger in [`global`] with its module-level
//! forwarders, and (with the `cli` feature) the `clap` flag helper in
//! `flag`.

pub mod global;
pub mod level;
#[allow(clippy::module_inception)]
pub mod logger;

#[cfg(feature = "cli")]
pub mod flag;

// Re-export commonly used types
#[cfg(feature = "cli")]
pub use flag::{level_arg, set_level_from_matches};
pub use global::{debug, error, fatal, global, info, log, set_level, set_level_name};
pub use level::{BadLevelError, Level};
pub use logger::Logger;
