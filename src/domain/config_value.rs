// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! This module provides the `ConfigValue` type, which wraps configuration values
//! and provides type-safe conversion methods to various Rust types.

use crate::domain::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for configuration values.
///
/// `ConfigValue` stores configuration values as strings internally and provides
/// type-safe conversion methods to common Rust types. The store returns a
/// uniform type while still providing type safety at the point of use.
///
/// Conversion failures surface the standard library's parse errors unmodified,
/// so a caller can match on `ParseIntError` and friends directly.
///
/// # Examples
///
/// ```
/// use lineconf::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("42".to_string());
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i64().unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::new("hello".to_string());
    /// assert_eq!(value.as_str(), "hello");
    /// ```
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("world");
    /// assert_eq!(value.as_str(), "world");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value as an owned `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("test");
    /// assert_eq!(value.as_string(), "test");
    /// ```
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// Anything else yields the [`std::str::ParseBoolError`] produced by
    /// `bool::from_str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("true");
    /// assert_eq!(value.as_bool().unwrap(), true);
    ///
    /// let value = ConfigValue::from("yes");
    /// assert_eq!(value.as_bool().unwrap(), true);
    /// ```
    pub fn as_bool(&self) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => Ok(self.0.parse::<bool>()?),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("9223372036854775807");
    /// assert_eq!(value.as_i64().unwrap(), 9223372036854775807);
    /// ```
    pub fn as_i64(&self) -> Result<i64> {
        Ok(self.0.parse::<i64>()?)
    }

    /// Converts the value to an `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("3.14");
    /// assert_eq!(value.as_f64().unwrap(), 3.14);
    /// ```
    pub fn as_f64(&self) -> Result<f64> {
        Ok(self.0.parse::<f64>()?)
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// The error type is whatever the target type's `FromStr` produces. This
    /// is the escape hatch for widths and types the named conversions do not
    /// cover.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse().unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    ///
    /// let port: u16 = ConfigValue::from("8080").parse().unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn parse<T>(&self) -> std::result::Result<T, T::Err>
    where
        T: FromStr,
    {
        self.0.parse::<T>()
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
