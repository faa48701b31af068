//! Configuration for n-gram analysis.
//!
//! [`NGramConfig`] holds the gram length bounds and the short word policy. It
//! can only be obtained in a validated state: through [`NGramConfig::new`], its
//! `Default` (3, 5, preserve original) or deserialization, which runs the same
//! checks. [`AnalyzerConfig`] adds the choice of word segmentation and can be
//! loaded from a JSON file.
//!
//! # Examples
//!
//! ```
//! use keylookup::config::{AnalyzerConfig, NGramConfig};
//!
//! let config: AnalyzerConfig = serde_json::from_str(
//!     r#"{ "tokenizer": "unicode_word", "ngram": { "min_gram": 2, "max_gram": 4 } }"#,
//! ).unwrap();
//! assert_eq!(config.ngram.min_gram(), 2);
//! assert!(config.ngram.preserve_original());
//!
//! assert!(NGramConfig::new(4, 2, true).is_err());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenizerKind;
use crate::error::{KeyLookupError, Result};

/// Default minimum n-gram length.
pub const DEFAULT_MIN_GRAM: usize = 3;

/// Default maximum n-gram length.
pub const DEFAULT_MAX_GRAM: usize = 5;

/// Validated n-gram settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NGramConfigFields")]
pub struct NGramConfig {
    min_gram: usize,
    max_gram: usize,
    preserve_original: bool,
    preserve_long: bool,
}

impl NGramConfig {
    /// Create a new configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - `min_gram` is 0
    /// - `max_gram` is less than `min_gram`
    pub fn new(min_gram: usize, max_gram: usize, preserve_original: bool) -> Result<Self> {
        if min_gram == 0 {
            return Err(KeyLookupError::configuration(
                "min_gram must be at least 1",
            ));
        }
        if max_gram < min_gram {
            return Err(KeyLookupError::configuration(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }
        Ok(NGramConfig {
            min_gram,
            max_gram,
            preserve_original,
            preserve_long: false,
        })
    }

    /// Also emit words longer than `max_gram` whole, after their n-grams.
    ///
    /// Off by default.
    pub fn with_preserve_long(mut self, preserve_long: bool) -> Self {
        self.preserve_long = preserve_long;
        self
    }

    /// Minimum gram length, in characters.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Maximum gram length, in characters.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    /// Whether words shorter than `min_gram` are emitted whole.
    pub fn preserve_original(&self) -> bool {
        self.preserve_original
    }

    /// Whether words longer than `max_gram` are also emitted whole.
    pub fn preserve_long(&self) -> bool {
        self.preserve_long
    }

    /// Number of n-grams produced for a word of `len` characters.
    ///
    /// Does not count the preserved original of a short or long word.
    pub fn gram_count(&self, len: usize) -> usize {
        (0..len)
            .map(|start| {
                let longest = self.max_gram.min(len - start);
                (longest + 1).saturating_sub(self.min_gram)
            })
            .sum()
    }
}

impl Default for NGramConfig {
    fn default() -> Self {
        NGramConfig {
            min_gram: DEFAULT_MIN_GRAM,
            max_gram: DEFAULT_MAX_GRAM,
            preserve_original: true,
            preserve_long: false,
        }
    }
}

/// Unvalidated field layout accepted from configuration files.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NGramConfigFields {
    min_gram: usize,
    max_gram: usize,
    preserve_original: bool,
    preserve_long: bool,
}

impl Default for NGramConfigFields {
    fn default() -> Self {
        NGramConfigFields {
            min_gram: DEFAULT_MIN_GRAM,
            max_gram: DEFAULT_MAX_GRAM,
            preserve_original: true,
            preserve_long: false,
        }
    }
}

impl TryFrom<NGramConfigFields> for NGramConfig {
    type Error = KeyLookupError;

    fn try_from(fields: NGramConfigFields) -> Result<Self> {
        Ok(
            NGramConfig::new(fields.min_gram, fields.max_gram, fields.preserve_original)?
                .with_preserve_long(fields.preserve_long),
        )
    }
}

/// Complete analyzer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Word segmentation strategy
    pub tokenizer: TokenizerKind,

    /// N-gram settings
    pub ngram: NGramConfig,
}

impl AnalyzerConfig {
    /// Create a configuration with the default tokenizer.
    pub fn new(ngram: NGramConfig) -> Self {
        AnalyzerConfig {
            tokenizer: TokenizerKind::default(),
            ngram,
        }
    }

    /// Set the tokenizer kind.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        log::debug!("loaded analyzer config from {}", path.as_ref().display());
        Ok(config)
    }
}
