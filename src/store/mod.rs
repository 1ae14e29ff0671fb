// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store layer containing the configuration store implementations.
//!
//! This module contains the [`Config`] store, which is the main interface
//! for parsing configuration text and reading values back out, and the
//! process-wide default store in [`global`] with its module-level
//! forwarders.

pub mod config;
pub mod global;

// Re-export commonly used types
pub use config::{Config, DEFAULT_SECTION};
pub use global::{
    get_bool, get_float, get_int, get_string, global, parse_default_location, parse_file,
    parse_str, set, set_default,
};
