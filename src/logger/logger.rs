// SPDX-License-Identifier: MIT OR Apache-2.0

//! The leveled line logger.
//!
//! This module provides the [`Logger`] type, which writes timestamped,
//! labeled lines to an injectable sink. It is deliberately small: three
//! severities, one output format, immediate writes.

use crate::logger::level::{BadLevelError, Level};
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::process;
use std::sync::{Mutex, RwLock};

/// A leveled logger writing timestamped lines to a sink.
///
/// Each record that passes the threshold is formatted as
/// `<timestamp> [<label>]: <message>` and written immediately; nothing is
/// buffered. The timestamp is the RFC 2822 rendering of local time
/// (`Tue, 26 Aug 2026 07:15:02 +0200`). The sink is any
/// `Write + Send` implementor, owned exclusively by the logger; writes are
/// serialized through a mutex so records from concurrent threads do not
/// interleave.
///
/// The threshold can be changed at any time from any thread. A record is
/// emitted iff its level is at or below the threshold, so a logger at
/// [`Level::Error`] emits only errors and one at [`Level::Debug`] emits
/// everything.
///
/// # Examples
///
/// ```
/// use lineconf::logger::{Level, Logger};
///
/// let log = Logger::new();
/// log.error("always emitted");
/// log.debug("dropped until the threshold is raised");
///
/// log.set_level(Level::Debug);
/// log.debug("now emitted");
/// ```
pub struct Logger {
    /// Minimum severity a record must meet
    threshold: RwLock<Level>,
    /// Destination for formatted lines
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Creates a logger at the [`Level::Error`] threshold writing to stdout.
    pub fn new() -> Self {
        Self::with_sink(Level::Error, Box::new(io::stdout()))
    }

    /// Creates a logger with an explicit threshold and sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::logger::{Level, Logger};
    ///
    /// let log = Logger::with_sink(Level::Info, Box::new(Vec::new()));
    /// log.info("kept in memory");
    /// ```
    pub fn with_sink(threshold: Level, sink: Box<dyn Write + Send>) -> Self {
        Self {
            threshold: RwLock::new(threshold),
            sink: Mutex::new(sink),
        }
    }

    /// Returns the current threshold.
    pub fn level(&self) -> Level {
        *self.threshold.read().unwrap()
    }

    /// Sets the threshold.
    pub fn set_level(&self, level: Level) {
        *self.threshold.write().unwrap() = level;
    }

    /// Parses a level name and sets the threshold.
    ///
    /// Accepts the names [`Level`] accepts, ignoring case. On an unknown
    /// name the threshold is left untouched and [`BadLevelError`] is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::logger::{Level, Logger};
    ///
    /// let log = Logger::new();
    /// log.set_level_name("debug").unwrap();
    /// assert_eq!(log.level(), Level::Debug);
    /// assert!(log.set_level_name("chatty").is_err());
    /// assert_eq!(log.level(), Level::Debug);
    /// ```
    pub fn set_level_name(&self, name: &str) -> std::result::Result<(), BadLevelError> {
        self.set_level(name.parse()?);
        Ok(())
    }

    /// Writes one record if `level` passes the threshold.
    ///
    /// The label is normally the level name; the wrappers below fix it to
    /// one. This method exposes it so callers can tag records with labels
    /// of their own (a subsystem name, a request id).
    pub fn log<M: fmt::Display>(&self, level: Level, label: &str, message: M) {
        if level > self.level() {
            return;
        }

        let timestamp = Local::now().to_rfc2822();
        // A poisoned sink lock drops the record.
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{} [{}]: {}", timestamp, label, message);
            let _ = sink.flush();
        }
    }

    /// Logs a message at [`Level::Error`].
    pub fn error<M: fmt::Display>(&self, message: M) {
        self.log(Level::Error, "ERROR", message);
    }

    /// Logs a message at [`Level::Info`].
    pub fn info<M: fmt::Display>(&self, message: M) {
        self.log(Level::Info, "INFO", message);
    }

    /// Logs a message at [`Level::Debug`].
    pub fn debug<M: fmt::Display>(&self, message: M) {
        self.log(Level::Debug, "DEBUG", message);
    }

    /// Logs a message at [`Level::Error`] and exits the process with status 1.
    ///
    /// The record is written and flushed before the process terminates.
    /// Destructors do not run; this is for unrecoverable failures.
    pub fn fatal<M: fmt::Display>(&self, message: M) -> ! {
        self.error(message);
        process::exit(1);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
