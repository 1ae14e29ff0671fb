// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line flag helper for selecting the log level.
//!
//! Available with the `cli` feature (enabled by default). Programs add the
//! argument from [`level_arg`] to their `clap` command and feed the parsed
//! matches to [`set_level_from_matches`] once at startup.

use crate::logger::global::global;
use crate::logger::level::BadLevelError;
use clap::{Arg, ArgMatches};

/// Builds the standard log-level argument for a `clap` command.
///
/// The argument is named and flagged `--<name>`, takes one value, and
/// defaults to `"ERROR"` so a program that never passes the flag logs only
/// errors. The value stays string-typed; validation happens in
/// [`set_level_from_matches`], which keeps the raw text available to
/// callers that want it.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use lineconf::logger::flag;
///
/// let matches = Command::new("demo")
///     .arg(flag::level_arg("log"))
///     .get_matches_from(["demo", "--log", "DEBUG"]);
///
/// assert_eq!(matches.get_one::<String>("log").unwrap(), "DEBUG");
/// ```
pub fn level_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("LEVEL")
        .default_value("ERROR")
        .help("Set log level [ERROR|INFO|DEBUG]")
}

/// Applies a parsed log-level argument to the default logger.
///
/// Reads the value of `name` from `matches` (the built-in default `"ERROR"`
/// when the flag was not passed) and sets the default logger's threshold
/// from it. On an unrecognized value the threshold is left untouched and
/// [`BadLevelError`] is returned. An argument that was defined without a
/// default and never passed is a no-op.
///
/// # Panics
///
/// Panics if `name` was never defined on the command, matching `clap`'s
/// behavior for mismatched argument ids.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use lineconf::logger::flag;
///
/// let matches = Command::new("demo")
///     .arg(flag::level_arg("log"))
///     .get_matches();
/// flag::set_level_from_matches(&matches, "log").unwrap();
/// ```
pub fn set_level_from_matches(
    matches: &ArgMatches,
    name: &str,
) -> Result<(), BadLevelError> {
    if let Some(value) = matches.get_one::<String>(name) {
        global().set_level_name(value)?;
    }
    Ok(())
}
