// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line classification for the configuration grammar.
//!
//! The file format is line-oriented: every line is independently one of a
//! small set of shapes, and a line that matches none of them is a syntax
//! error. This module owns that classification; the store in
//! [`crate::store`] drives it and gives the shapes meaning.

use crate::domain::errors::{ConfigError, Result};

/// The shapes a single line of configuration text can take.
///
/// Produced by [`Line::classify`]. `Blank` and `Comment` carry nothing
/// because the parser skips them; `Section` and `Assignment` carry the
/// already-trimmed text the store needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// A line containing only whitespace.
    Blank,
    /// A line whose first non-whitespace character is `#`.
    Comment,
    /// A `[name]` header opening a section.
    Section(String),
    /// A `key = value` pair.
    Assignment {
        /// The key, trimmed.
        key: String,
        /// The value, truncated at the first `#` and trimmed.
        value: String,
    },
}

impl Line {
    /// Classifies one raw line of configuration text.
    ///
    /// The checks run in order against the whitespace-trimmed line and the
    /// first match wins:
    ///
    /// 1. blank lines and `#` comments,
    /// 2. `[name]` section headers; text after the closing `]` is ignored,
    /// 3. `key = value` pairs, split at the first `=`, with the value
    ///    truncated at the first `#`,
    /// 4. anything else is a [`ConfigError::SyntaxError`] carrying the raw
    ///    line.
    ///
    /// A `[` with no closing `]` is not a header; such a line still counts
    /// as an assignment when it contains `=`. Keys, values, and section
    /// names are not validated, so empty ones pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineconf::domain::line::Line;
    ///
    /// assert_eq!(Line::classify("   ").unwrap(), Line::Blank);
    /// assert_eq!(Line::classify("# note").unwrap(), Line::Comment);
    /// assert_eq!(
    ///     Line::classify("[server]").unwrap(),
    ///     Line::Section("server".to_string())
    /// );
    /// assert_eq!(
    ///     Line::classify("port = 8080 # tcp").unwrap(),
    ///     Line::Assignment {
    ///         key: "port".to_string(),
    ///         value: "8080".to_string(),
    ///     }
    /// );
    /// assert!(Line::classify("no equals sign").is_err());
    /// ```
    pub fn classify(raw: &str) -> Result<Line> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(Line::Blank);
        }

        if trimmed.starts_with('#') {
            return Ok(Line::Comment);
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            // Header detection needs both brackets; `[x` may still be a key.
            if let Some(end) = rest.find(']') {
                return Ok(Line::Section(rest[..end].trim().to_string()));
            }
        }

        if let Some((key, value)) = trimmed.split_once('=') {
            let value = match value.find('#') {
                Some(pos) => &value[..pos],
                None => value,
            };
            return Ok(Line::Assignment {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            });
        }

        Err(ConfigError::SyntaxError {
            line: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(key: &str, value: &str) -> Line {
        Line::Assignment {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_blank_lines() {
        for raw in ["", " ", "\t", "   \t  "] {
            assert_eq!(Line::classify(raw).unwrap(), Line::Blank, "raw: {:?}", raw);
        }
    }

    #[test]
    fn test_comment_lines() {
        for raw in ["# comment", "#", "   # indented", "#key = value"] {
            assert_eq!(
                Line::classify(raw).unwrap(),
                Line::Comment,
                "raw: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_section_header() {
        assert_eq!(
            Line::classify("[server]").unwrap(),
            Line::Section("server".to_string())
        );
        assert_eq!(
            Line::classify("  [ server ]  ").unwrap(),
            Line::Section("server".to_string())
        );
    }

    #[test]
    fn test_section_trailing_text_ignored() {
        assert_eq!(
            Line::classify("[server] anything here").unwrap(),
            Line::Section("server".to_string())
        );
        assert_eq!(
            Line::classify("[a]b]c").unwrap(),
            Line::Section("a".to_string())
        );
        assert_eq!(
            Line::classify("[server] extra = 1").unwrap(),
            Line::Section("server".to_string())
        );
    }

    #[test]
    fn test_empty_section_name() {
        assert_eq!(Line::classify("[]").unwrap(), Line::Section(String::new()));
    }

    #[test]
    fn test_assignment_basic() {
        assert_eq!(Line::classify("key=value").unwrap(), assignment("key", "value"));
        assert_eq!(
            Line::classify("  key = value  ").unwrap(),
            assignment("key", "value")
        );
    }

    #[test]
    fn test_assignment_splits_at_first_equals() {
        assert_eq!(Line::classify("k=a=b").unwrap(), assignment("k", "a=b"));
        assert_eq!(Line::classify("k==v").unwrap(), assignment("k", "=v"));
    }

    #[test]
    fn test_assignment_inline_comment_truncates_value() {
        assert_eq!(
            Line::classify("port = 8080 # listen here").unwrap(),
            assignment("port", "8080")
        );
        assert_eq!(Line::classify("port = 80#prod").unwrap(), assignment("port", "80"));
        assert_eq!(Line::classify("k = #all comment").unwrap(), assignment("k", ""));
    }

    #[test]
    fn test_assignment_empty_key_and_value() {
        assert_eq!(Line::classify("= value").unwrap(), assignment("", "value"));
        assert_eq!(Line::classify("key =").unwrap(), assignment("key", ""));
        assert_eq!(Line::classify("=").unwrap(), assignment("", ""));
    }

    #[test]
    fn test_unclosed_bracket_falls_through_to_assignment() {
        assert_eq!(
            Line::classify("[partial = 1").unwrap(),
            assignment("[partial", "1")
        );
    }

    #[test]
    fn test_unclosed_bracket_without_equals_is_error() {
        let err = Line::classify("[partial").unwrap_err();
        assert!(matches!(err, ConfigError::SyntaxError { .. }));
    }

    #[test]
    fn test_error_carries_raw_line() {
        let raw = "  this line is junk  ";
        match Line::classify(raw).unwrap_err() {
            ConfigError::SyntaxError { line } => assert_eq!(line, raw),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
