// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log severity levels and their parsing.
//!
//! Levels have a total order and a stable numeric protocol: `ERROR` is 0,
//! `INFO` is 1, `DEBUG` is 2. Both the names and the numbers parse
//! fallibly; nothing in this crate guesses a level from bad input.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a log level name or ordinal is not recognized.
///
/// Carries the rejected input.
///
/// # Examples
///
/// ```
/// use lineconf::logger::Level;
///
/// let err = "chatty".parse::<Level>().unwrap_err();
/// assert_eq!(err.to_string(), "Unknown log level: chatty");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown log level: {0}")]
pub struct BadLevelError(String);

/// A log severity level.
///
/// Ordering follows verbosity: [`Level::Error`] is the most severe and
/// least verbose, [`Level::Debug`] the least severe and most verbose. A
/// record is emitted when its level is at or below the logger's threshold,
/// so a logger at `Error` emits only errors and one at `Debug` emits
/// everything.
///
/// # Examples
///
/// ```
/// use lineconf::logger::Level;
///
/// assert!(Level::Error < Level::Info);
/// assert!(Level::Info < Level::Debug);
/// assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
/// assert_eq!(Level::Debug as u8, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Failures; ordinal 0, always emitted.
    Error,
    /// Normal operational messages; ordinal 1.
    Info,
    /// Verbose diagnostics; ordinal 2.
    Debug,
}

impl Level {
    /// Returns the canonical upper-case name of the level.
    ///
    /// This is the name [`FromStr`] accepts and the label the logger prints.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = BadLevelError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(BadLevelError(name.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = BadLevelError;

    fn try_from(ordinal: u8) -> std::result::Result<Self, BadLevelError> {
        match ordinal {
            0 => Ok(Level::Error),
            1 => Ok(Level::Info),
            2 => Ok(Level::Debug),
            other => Err(BadLevelError(other.to_string())),
        }
    }
}
