// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration store and the parser that fills it.
//!
//! A [`Config`] holds `(section, key) -> value` entries behind a read/write
//! lock and is populated by parsing line-oriented configuration text, by
//! loading files, or by `set` calls. Any number of sources can be layered
//! into one store; the last write for a key wins.

use crate::domain::{ConfigError, ConfigValue, Line, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::sync::RwLock;

/// Name of the implicit section that sectionless keys land in.
pub const DEFAULT_SECTION: &str = "default";

/// File name looked up by `parse_default_location`.
const DEFAULT_FILE_NAME: &str = "config.conf";

/// A thread-safe store of configuration entries grouped into sections.
///
/// The store is created empty and populated additively: every `parse*` call
/// and every [`set`](Config::set) merges into what is already there, with
/// the last write for a `(section, key)` pair winning. Reads take a shared
/// lock, writes an exclusive one, so a `Config` can be shared across
/// threads (behind an `Arc`, or as the process-wide default in
/// [`crate::store::global`]).
///
/// # Examples
///
/// ```rust
/// use lineconf::store::Config;
///
/// # fn main() -> lineconf::domain::Result<()> {
/// let config = Config::new();
/// config.parse_str("[server]\nport = 8080\nverbose = yes\n")?;
///
/// assert_eq!(config.get_int("server", "port")?, 8080);
/// assert_eq!(config.get_bool("server", "verbose")?, true);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Config {
    /// Entries keyed by section name, then by key
    entries: RwLock<HashMap<String, HashMap<String, ConfigValue>>>,
}

impl Config {
    /// Creates a new empty store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineconf::store::Config;
    ///
    /// let config = Config::new();
    /// assert!(config.sections().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a value under `(section, key)`, replacing any previous value.
    ///
    /// The section bucket is created on first use. Neither section, key, nor
    /// value content is validated; empty strings are legal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineconf::store::Config;
    ///
    /// let config = Config::new();
    /// config.set("server", "host", "localhost");
    /// assert_eq!(config.get_string("server", "host").unwrap(), "localhost");
    /// ```
    pub fn set(&self, section: &str, key: &str, value: impl Into<ConfigValue>) {
        let mut entries = self.entries.write().unwrap();
        entries
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Stores a value in the implicit [`DEFAULT_SECTION`].
    ///
    /// Convenience for flat, sectionless configuration; equivalent to
    /// `set(DEFAULT_SECTION, key, value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineconf::store::{Config, DEFAULT_SECTION};
    ///
    /// let config = Config::new();
    /// config.set_default("retries", "3");
    /// assert_eq!(config.get_int(DEFAULT_SECTION, "retries").unwrap(), 3);
    /// ```
    pub fn set_default(&self, key: &str, value: impl Into<ConfigValue>) {
        self.set(DEFAULT_SECTION, key, value);
    }

    /// Looks up the raw value stored under `(section, key)`.
    ///
    /// Returns [`ConfigError::SectionNotFound`] when the section does not
    /// exist and [`ConfigError::KeyNotFound`] when the section exists but
    /// the key does not, so callers can tell the two misses apart.
    pub fn get_value(&self, section: &str, key: &str) -> Result<ConfigValue> {
        let entries = self.entries.read().unwrap();
        let bucket = entries
            .get(section)
            .ok_or_else(|| ConfigError::SectionNotFound {
                section: section.to_string(),
            })?;
        bucket
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Looks up a value as a `String`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineconf::store::Config;
    ///
    /// let config = Config::new();
    /// config.set("paths", "data", "/var/lib/app");
    /// assert_eq!(config.get_string("paths", "data").unwrap(), "/var/lib/app");
    /// assert!(config.get_string("paths", "missing").is_err());
    /// ```
    pub fn get_string(&self, section: &str, key: &str) -> Result<String> {
        self.get_value(section, key).map(String::from)
    }

    /// Looks up a value and converts it to a boolean.
    ///
    /// Accepts the spellings [`ConfigValue::as_bool`] accepts. A stored
    /// value that converts to neither truth value surfaces the underlying
    /// [`std::str::ParseBoolError`] unmodified.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        self.get_value(section, key)?.as_bool()
    }

    /// Looks up a value and converts it to an `i64`.
    ///
    /// A stored value that is not an integer surfaces the underlying
    /// [`std::num::ParseIntError`] unmodified.
    pub fn get_int(&self, section: &str, key: &str) -> Result<i64> {
        self.get_value(section, key)?.as_i64()
    }

    /// Looks up a value and converts it to an `f64`.
    ///
    /// A stored value that is not a float surfaces the underlying
    /// [`std::num::ParseFloatError`] unmodified.
    pub fn get_float(&self, section: &str, key: &str) -> Result<f64> {
        self.get_value(section, key)?.as_f64()
    }

    /// Returns `true` if the section exists.
    ///
    /// A section exists once it holds at least one key; a `[header]` alone
    /// in parsed text does not materialize it.
    pub fn has_section(&self, section: &str) -> bool {
        let entries = self.entries.read().unwrap();
        entries.contains_key(section)
    }

    /// Returns `true` if `(section, key)` holds a value.
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        let entries = self.entries.read().unwrap();
        entries
            .get(section)
            .map(|bucket| bucket.contains_key(key))
            .unwrap_or(false)
    }

    /// Returns the section names, sorted.
    pub fn sections(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap();
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the keys of one section, sorted.
    ///
    /// Returns [`ConfigError::SectionNotFound`] if the section is absent.
    pub fn keys(&self, section: &str) -> Result<Vec<String>> {
        let entries = self.entries.read().unwrap();
        let bucket = entries
            .get(section)
            .ok_or_else(|| ConfigError::SectionNotFound {
                section: section.to_string(),
            })?;
        let mut keys: Vec<String> = bucket.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    /// Parses line-oriented configuration text from a reader into the store.
    ///
    /// Lines are classified by [`Line::classify`]: blanks and `#` comments
    /// are skipped, a `[name]` header switches the current section (starting
    /// from [`DEFAULT_SECTION`]), and every `key = value` line is stored
    /// immediately under its own write lock. On the first unclassifiable
    /// line, parsing stops and the error carries that line; entries stored
    /// before the failure remain. Concurrent readers may observe a parse in
    /// progress as a partially populated store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineconf::store::Config;
    ///
    /// # fn main() -> lineconf::domain::Result<()> {
    /// let config = Config::new();
    /// config.parse("timeout = 30 # seconds\n[tls]\ncert = /etc/app.pem\n".as_bytes())?;
    ///
    /// assert_eq!(config.get_int("default", "timeout")?, 30);
    /// assert_eq!(config.get_string("tls", "cert")?, "/etc/app.pem");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse<R: Read>(&self, reader: R) -> Result<()> {
        let mut section = DEFAULT_SECTION.to_string();

        for raw in BufReader::new(reader).lines() {
            match Line::classify(&raw?)? {
                Line::Blank | Line::Comment => {}
                Line::Section(name) => section = name,
                Line::Assignment { key, value } => self.set(&section, &key, value),
            }
        }

        Ok(())
    }

    /// Parses configuration text from an in-memory string.
    ///
    /// Same grammar and error behavior as [`parse`](Config::parse).
    pub fn parse_str(&self, content: &str) -> Result<()> {
        self.parse(content.as_bytes())
    }

    /// Opens a file and parses it into the store.
    ///
    /// The file handle is held only for the duration of the call and is
    /// released on every exit path, including errors.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lineconf::store::Config;
    ///
    /// let config = Config::new();
    /// config.parse_file("/etc/myapp/config.conf").unwrap();
    /// ```
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration file: {}", path.display());
        let file = File::open(path)?;
        self.parse(file)
    }

    /// Parses `config.conf` from the OS-appropriate configuration directory.
    ///
    /// Uses the `directories` crate to resolve the per-user configuration
    /// directory for `app_name` under `qualifier` (e.g. "com.example"), then
    /// delegates to [`parse_file`](Config::parse_file).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lineconf::store::Config;
    ///
    /// let config = Config::new();
    /// config.parse_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn parse_default_location(&self, app_name: &str, qualifier: &str) -> Result<()> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                "failed to determine the configuration directory",
            ))
        })?;

        let config_file = proj_dirs.config_dir().join(DEFAULT_FILE_NAME);
        tracing::debug!("Default configuration location: {}", config_file.display());
        self.parse_file(config_file)
    }

    /// Writes the store out in the same line grammar the parser accepts.
    ///
    /// Sections and keys are emitted in sorted order so the output is
    /// deterministic. Values containing `#` or leading/trailing whitespace
    /// do not survive a round trip; the grammar truncates values at `#` and
    /// trims them on the way back in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineconf::store::Config;
    ///
    /// # fn main() -> lineconf::domain::Result<()> {
    /// let config = Config::new();
    /// config.set("b", "k", "2");
    /// config.set("a", "k", "1");
    ///
    /// let mut out = Vec::new();
    /// config.write_to(&mut out)?;
    /// assert_eq!(String::from_utf8(out).unwrap(), "[a]\nk = 1\n\n[b]\nk = 2\n\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let entries = self.entries.read().unwrap();

        let mut sections: Vec<_> = entries.iter().collect();
        sections.sort_by(|a, b| a.0.cmp(b.0));

        for (name, bucket) in sections {
            writeln!(out, "[{}]", name)?;
            let mut pairs: Vec<_> = bucket.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in pairs {
                writeln!(out, "{} = {}", key, value)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let config = Config::new();
        assert!(config.sections().is_empty());
        assert!(!config.has_section("anything"));
    }

    #[test]
    fn test_set_and_get() {
        let config = Config::new();
        config.set("server", "host", "localhost");

        assert_eq!(config.get_string("server", "host").unwrap(), "localhost");
        assert_eq!(
            config.get_value("server", "host").unwrap(),
            ConfigValue::from("localhost")
        );
    }

    #[test]
    fn test_set_overwrites() {
        let config = Config::new();
        config.set("server", "host", "first");
        config.set("server", "host", "second");

        assert_eq!(config.get_string("server", "host").unwrap(), "second");
    }

    #[test]
    fn test_set_default_uses_default_section() {
        let config = Config::new();
        config.set_default("retries", "3");

        assert_eq!(config.get_int(DEFAULT_SECTION, "retries").unwrap(), 3);
        assert!(config.has_key("default", "retries"));
    }

    #[test]
    fn test_get_missing_section() {
        let config = Config::new();
        config.set("present", "key", "value");

        let err = config.get_string("absent", "key").unwrap_err();
        assert!(matches!(err, ConfigError::SectionNotFound { .. }));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_get_missing_key_in_existing_section() {
        let config = Config::new();
        config.set("present", "key", "value");

        let err = config.get_string("present", "other").unwrap_err();
        assert!(matches!(err, ConfigError::KeyNotFound { .. }));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("other"));
    }

    #[test]
    fn test_typed_accessors() {
        let config = Config::new();
        config.set("types", "int", "42");
        config.set("types", "float", "2.5");
        config.set("types", "flag", "yes");

        assert_eq!(config.get_int("types", "int").unwrap(), 42);
        assert_eq!(config.get_float("types", "float").unwrap(), 2.5);
        assert_eq!(config.get_bool("types", "flag").unwrap(), true);
    }

    #[test]
    fn test_typed_accessor_conversion_errors() {
        let config = Config::new();
        config.set("types", "int", "12x");
        config.set("types", "float", "abc");
        config.set("types", "flag", "maybe");

        assert!(matches!(
            config.get_int("types", "int").unwrap_err(),
            ConfigError::InvalidInt(_)
        ));
        assert!(matches!(
            config.get_float("types", "float").unwrap_err(),
            ConfigError::InvalidFloat(_)
        ));
        assert!(matches!(
            config.get_bool("types", "flag").unwrap_err(),
            ConfigError::InvalidBool(_)
        ));
    }

    #[test]
    fn test_int_error_passes_through_unmodified() {
        let config = Config::new();
        config.set("types", "int", "12x");

        let expected = "12x".parse::<i64>().unwrap_err().to_string();
        let err = config.get_int("types", "int").unwrap_err();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_parse_str_basic() {
        let config = Config::new();
        config
            .parse_str("# demo\nname = app\n\n[server]\nport = 8080\n")
            .unwrap();

        assert_eq!(config.get_string("default", "name").unwrap(), "app");
        assert_eq!(config.get_int("server", "port").unwrap(), 8080);
    }

    #[test]
    fn test_parse_sectionless_keys_go_to_default() {
        let config = Config::new();
        config.parse_str("above = 1\n[s]\ninside = 2\n").unwrap();

        assert_eq!(config.get_int(DEFAULT_SECTION, "above").unwrap(), 1);
        assert_eq!(config.get_int("s", "inside").unwrap(), 2);
        assert!(!config.has_key(DEFAULT_SECTION, "inside"));
    }

    #[test]
    fn test_parse_inline_comment_truncates_value() {
        let config = Config::new();
        config.parse_str("port = 8080 # tcp listen port\n").unwrap();

        assert_eq!(config.get_string("default", "port").unwrap(), "8080");
    }

    #[test]
    fn test_parse_header_alone_does_not_create_section() {
        let config = Config::new();
        config.parse_str("[empty]\n[full]\nk = v\n").unwrap();

        assert!(!config.has_section("empty"));
        assert!(config.has_section("full"));
    }

    #[test]
    fn test_parse_stops_at_syntax_error_and_keeps_prior_entries() {
        let config = Config::new();
        let err = config
            .parse_str("ok = 1\nthis is junk\nnever = 2\n")
            .unwrap_err();

        match err {
            ConfigError::SyntaxError { line } => assert_eq!(line, "this is junk"),
            other => panic!("expected syntax error, got {:?}", other),
        }
        assert_eq!(config.get_int("default", "ok").unwrap(), 1);
        assert!(!config.has_key("default", "never"));
    }

    #[test]
    fn test_parse_is_additive_and_last_write_wins() {
        let config = Config::new();
        config.parse_str("[a]\nk = 1\n").unwrap();
        config.parse_str("[a]\nk = 2\nother = 3\n").unwrap();

        assert_eq!(config.get_int("a", "k").unwrap(), 2);
        assert_eq!(config.get_int("a", "other").unwrap(), 3);
    }

    #[test]
    fn test_sections_and_keys_are_sorted() {
        let config = Config::new();
        config.set("zeta", "z", "1");
        config.set("alpha", "b", "2");
        config.set("alpha", "a", "3");

        assert_eq!(config.sections(), vec!["alpha", "zeta"]);
        assert_eq!(config.keys("alpha").unwrap(), vec!["a", "b"]);
        assert!(matches!(
            config.keys("missing").unwrap_err(),
            ConfigError::SectionNotFound { .. }
        ));
    }

    #[test]
    fn test_write_to_round_trips() {
        let config = Config::new();
        config.set("server", "host", "localhost");
        config.set("server", "port", "8080");
        config.set("default", "name", "app");

        let mut out = Vec::new();
        config.write_to(&mut out).unwrap();

        let reparsed = Config::new();
        reparsed.parse(out.as_slice()).unwrap();

        assert_eq!(reparsed.get_string("server", "host").unwrap(), "localhost");
        assert_eq!(reparsed.get_int("server", "port").unwrap(), 8080);
        assert_eq!(reparsed.get_string("default", "name").unwrap(), "app");
        assert_eq!(reparsed.sections(), config.sections());
    }

    #[test]
    fn test_parse_file_missing_path_is_io_error() {
        let config = Config::new();
        let err = config
            .parse_file("/definitely/not/a/real/path.conf")
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_empty_key_and_empty_value_are_stored() {
        let config = Config::new();
        config.parse_str("= bare\nempty =\n").unwrap();

        assert_eq!(config.get_string("default", "").unwrap(), "bare");
        assert_eq!(config.get_string("default", "empty").unwrap(), "");
    }

    #[test]
    fn test_default_trait_matches_new() {
        let config = Config::default();
        assert!(config.sections().is_empty());
    }
}
