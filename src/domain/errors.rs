// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration half of the crate.
//!
//! This module defines the error types that can occur when parsing configuration
//! text or looking up values. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when parsing
/// configuration text or accessing configuration values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// Lookup failures distinguish between a missing section and a missing key, so
/// callers can tell which level of the lookup failed. Type conversion failures
/// carry the standard library's parse error unmodified.
///
/// # Examples
///
/// ```
/// use lineconf::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         section: "database".to_string(),
///         key: "host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested section does not exist in the store.
    #[error("Configuration section not found: {section}")]
    SectionNotFound {
        /// The section that was not found
        section: String,
    },

    /// The section exists but does not contain the requested key.
    #[error("Configuration key not found: {key} (section '{section}')")]
    KeyNotFound {
        /// The section that was searched
        section: String,
        /// The key that was not found
        key: String,
    },

    /// A line of configuration text matched none of the recognized shapes.
    #[error("Syntax error in configuration line: {line}")]
    SyntaxError {
        /// The offending line, exactly as read
        line: String,
    },

    /// A value could not be converted to a boolean.
    #[error(transparent)]
    InvalidBool(#[from] std::str::ParseBoolError),

    /// A value could not be converted to an integer.
    #[error(transparent)]
    InvalidInt(#[from] std::num::ParseIntError),

    /// A value could not be converted to a float.
    #[error(transparent)]
    InvalidFloat(#[from] std::num::ParseFloatError),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns `true` if this error is a lookup miss.
    ///
    /// Covers both [`ConfigError::SectionNotFound`] and
    /// [`ConfigError::KeyNotFound`], which is the usual distinction callers
    /// care about when a missing value should fall back to a default rather
    /// than abort.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::errors::ConfigError;
    ///
    /// let error = ConfigError::SectionNotFound {
    ///     section: "server".to_string(),
    /// };
    /// assert!(error.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::SectionNotFound { .. } | ConfigError::KeyNotFound { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_not_found_error() {
        let error = ConfigError::SectionNotFound {
            section: "server".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration section not found: server");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            section: "server".to_string(),
            key: "port".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration key not found: port (section 'server')"
        );
        assert!(error.is_not_found());
    }

    #[test]
    fn test_syntax_error() {
        let error = ConfigError::SyntaxError {
            line: "no equals sign here".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Syntax error in configuration line: no equals sign here"
        );
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_invalid_int_is_transparent() {
        let parse_err = "not_a_number".parse::<i64>().unwrap_err();
        let expected = parse_err.to_string();
        let error = ConfigError::from(parse_err);
        assert!(matches!(error, ConfigError::InvalidInt(_)));
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_invalid_float_is_transparent() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let expected = parse_err.to_string();
        let error = ConfigError::from(parse_err);
        assert!(matches!(error, ConfigError::InvalidFloat(_)));
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_invalid_bool_is_transparent() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let expected = parse_err.to_string();
        let error = ConfigError::from(parse_err);
        assert!(matches!(error, ConfigError::InvalidBool(_)));
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
        assert!(!error.is_not_found());
    }
}
