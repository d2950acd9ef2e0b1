//! Error types for the Wordkin library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`WordkinError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordkin::error::{Result, WordkinError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordkinError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Wordkin operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum WordkinError {
    /// I/O errors (dictionary file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordkinError.
pub type Result<T> = std::result::Result<T, WordkinError>;

impl WordkinError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordkinError::Dictionary(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        WordkinError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordkinError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordkinError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordkinError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = WordkinError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");

        let error = WordkinError::invalid_argument("bad word");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad word");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wordkin_error = WordkinError::from(io_error);

        match wordkin_error {
            WordkinError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
