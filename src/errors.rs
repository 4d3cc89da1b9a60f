//! Error types for dictionary loading and query handling, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - E001: `TooManyWildcards` (Query has more than four `*`)
//! - E002: `InvalidQueryChar` (Query character outside a-z and `*`)
//! - E003: `DictionaryRead` (Word list file could not be read)
//! - E004: `EmptyDictionary` (Word list contained no usable words)
//!
//! Malformed characters never surface as errors from the search engine itself:
//! a comparison involving them simply reports no match. `InvalidQueryChar` is
//! raised only by the strict [`crate::wildcard::validate_query`] front door.
//!
//! # Example
//!
//! ```
//! use anagram_dict::errors::AnagramError;
//!
//! let err = AnagramError::TooManyWildcards { query: "*****".to_string(), count: 5 };
//! assert_eq!(err.code(), "E001");
//! assert!(err.display_detailed().contains("E001"));
//! ```

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    #[error("Query \"{query}\" has {count} wildcards (at most 4 are supported)")]
    TooManyWildcards { query: String, count: usize },

    #[error("Query \"{query}\" contains invalid character '{invalid_char}' (only a-z and '*' allowed)")]
    InvalidQueryChar { query: String, invalid_char: char },

    #[error("Failed to read dictionary '{path}': {source}")]
    DictionaryRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Dictionary '{path}' contains no usable words")]
    EmptyDictionary { path: String },
}

impl From<AnagramError> for io::Error {
    fn from(e: AnagramError) -> Self {
        match e {
            AnagramError::DictionaryRead { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

impl AnagramError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AnagramError::TooManyWildcards { .. } => "E001",
            AnagramError::InvalidQueryChar { .. } => "E002",
            AnagramError::DictionaryRead { .. } => "E003",
            AnagramError::EmptyDictionary { .. } => "E004",
        }
    }

    /// Returns a helpful suggestion for this error, if there is one
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            AnagramError::TooManyWildcards { .. } => {
                Some("Replace some '*' with known letters (e.g., 'a**le' instead of '*****')")
            }
            AnagramError::InvalidQueryChar { .. } => {
                Some("Queries use lowercase letters a-z, plus '*' for an unknown letter")
            }
            AnagramError::EmptyDictionary { .. } => {
                Some("The word list should hold one lowercase word per line")
            }
            AnagramError::DictionaryRead { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
