// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types for the configuration half of
//! the crate: the value wrapper, the line grammar, and the error type. It is
//! independent of any external concerns and defines the fundamental concepts
//! used throughout the library.

pub mod config_value;
pub mod errors;
pub mod line;

// Re-export commonly used types
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use line::Line;
