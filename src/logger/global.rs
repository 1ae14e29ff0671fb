// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! A lazily created [`Logger`] at the [`Level::Error`] threshold writing to
//! stdout, with thin forwarders so callers can write `logger::info(..)`
//! without carrying an instance around. Raise the threshold with
//! [`set_level`] or [`set_level_name`] (typically from a command-line
//! flag).

use crate::logger::level::{BadLevelError, Level};
use crate::logger::logger::Logger;
use once_cell::sync::Lazy;
use std::fmt;

static GLOBAL: Lazy<Logger> = Lazy::new(Logger::new);

/// Returns the process-wide default logger.
///
/// Created on first use with the [`Level::Error`] threshold and stdout as
/// the sink; lives for the rest of the process.
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Sets the default logger's threshold. See [`Logger::set_level`].
pub fn set_level(level: Level) {
    GLOBAL.set_level(level);
}

/// Parses a level name and sets the default logger's threshold.
/// See [`Logger::set_level_name`].
pub fn set_level_name(name: &str) -> Result<(), BadLevelError> {
    GLOBAL.set_level_name(name)
}

/// Writes one record through the default logger. See [`Logger::log`].
pub fn log<M: fmt::Display>(level: Level, label: &str, message: M) {
    GLOBAL.log(level, label, message);
}

/// Logs a message at [`Level::Error`] through the default logger.
///
/// # Examples
///
/// ```
/// use lineconf::logger;
///
/// logger::error("backup failed");
/// logger::error(format_args!("attempt {} of {}", 2, 3));
/// ```
pub fn error<M: fmt::Display>(message: M) {
    GLOBAL.error(message);
}

/// Logs a message at [`Level::Info`] through the default logger.
pub fn info<M: fmt::Display>(message: M) {
    GLOBAL.info(message);
}

/// Logs a message at [`Level::Debug`] through the default logger.
pub fn debug<M: fmt::Display>(message: M) {
    GLOBAL.debug(message);
}

/// Logs at [`Level::Error`] through the default logger, then exits the
/// process with status 1. See [`Logger::fatal`].
pub fn fatal<M: fmt::Display>(message: M) -> ! {
    GLOBAL.fatal(message)
}
