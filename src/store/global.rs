// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default configuration store.
//!
//! Most programs want exactly one configuration store. This module owns a
//! lazily created [`Config`] and exposes thin forwarders to it, so callers
//! that do not need an injectable instance can write
//! `store::parse_file(..)` and `store::get_string(..)` directly. The
//! functions here do nothing an explicit [`Config`] cannot.

use crate::domain::{ConfigValue, Result};
use crate::store::config::Config;
use once_cell::sync::Lazy;
use std::path::Path;

static GLOBAL: Lazy<Config> = Lazy::new(Config::new);

/// Returns the process-wide default store.
///
/// The store is created empty on first use and lives for the rest of the
/// process. Anything the [`Config`] API offers is available on it.
///
/// # Examples
///
/// ```rust
/// use lineconf::store;
///
/// store::global().set("app", "name", "demo");
/// assert_eq!(store::get_string("app", "name").unwrap(), "demo");
/// ```
pub fn global() -> &'static Config {
    &GLOBAL
}

/// Opens a file and parses it into the default store. See [`Config::parse_file`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<()> {
    GLOBAL.parse_file(path)
}

/// Parses configuration text into the default store. See [`Config::parse_str`].
pub fn parse_str(content: &str) -> Result<()> {
    GLOBAL.parse_str(content)
}

/// Parses `config.conf` from the OS-appropriate configuration directory into
/// the default store. See [`Config::parse_default_location`].
pub fn parse_default_location(app_name: &str, qualifier: &str) -> Result<()> {
    GLOBAL.parse_default_location(app_name, qualifier)
}

/// Stores a value in the default store. See [`Config::set`].
pub fn set(section: &str, key: &str, value: impl Into<ConfigValue>) {
    GLOBAL.set(section, key, value)
}

/// Stores a sectionless value in the default store. See [`Config::set_default`].
pub fn set_default(key: &str, value: impl Into<ConfigValue>) {
    GLOBAL.set_default(key, value)
}

/// Looks up a string in the default store. See [`Config::get_string`].
pub fn get_string(section: &str, key: &str) -> Result<String> {
    GLOBAL.get_string(section, key)
}

/// Looks up a boolean in the default store. See [`Config::get_bool`].
pub fn get_bool(section: &str, key: &str) -> Result<bool> {
    GLOBAL.get_bool(section, key)
}

/// Looks up an integer in the default store. See [`Config::get_int`].
pub fn get_int(section: &str, key: &str) -> Result<i64> {
    GLOBAL.get_int(section, key)
}

/// Looks up a float in the default store. See [`Config::get_float`].
pub fn get_float(section: &str, key: &str) -> Result<f64> {
    GLOBAL.get_float(section, key)
}
