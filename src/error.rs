//! Error types for the keylookup library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`KeyLookupError`]. Analysis of a text never fails once an analyzer has been
//! built; errors come from invalid configuration or from loading configuration
//! and input files.
//!
//! # Examples
//!
//! ```
//! use keylookup::config::NGramConfig;
//! use keylookup::error::KeyLookupError;
//!
//! match NGramConfig::new(0, 5, true) {
//!     Err(KeyLookupError::Configuration(msg)) => assert!(msg.contains("min_gram")),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for keylookup operations.
#[derive(Error, Debug)]
pub enum KeyLookupError {
    /// I/O errors (reading input or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid analyzer configuration, reported when the analyzer is built
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with KeyLookupError.
pub type Result<T> = std::result::Result<T, KeyLookupError>;

impl KeyLookupError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        KeyLookupError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KeyLookupError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KeyLookupError::Other(msg.into())
    }
}
