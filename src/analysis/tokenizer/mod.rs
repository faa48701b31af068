//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of the analysis pipeline: they split the
//! input text into word tokens whose offsets point into that text.
//!
//! # Available Tokenizers
//!
//! - [`alphanumeric::AlphanumericTokenizer`] - Maximal runs of alphanumeric characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)
//!
//! [`utf8_runs::Utf8RunTokens`] runs any of them over raw bytes that may
//! contain malformed UTF-8.
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::tokenizer::Tokenizer;
//! use keylookup::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
//!
//! let tokenizer = AlphanumericTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The returned stream borrows the text and produces tokens on demand. Every
/// call starts from the beginning of the text, so a tokenizer can be reused
/// for any number of inputs. The trait requires `Send + Sync` to allow use in
/// concurrent contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use keylookup::analysis::token::{Token, TokenStream};
/// use keylookup::analysis::tokenizer::Tokenizer;
/// use keylookup::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
///         let mut offset = 0;
///         let tokens = text.split(',').enumerate().map(move |(i, s)| {
///             let token = Token::with_offsets(s, i, offset, offset + s.len());
///             offset += s.len() + 1;
///             token
///         });
///         Ok(Box::new(tokens))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Word segmentation strategy selectable through configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Maximal runs of alphanumeric characters
    #[default]
    Alphanumeric,
    /// Unicode word boundaries (UAX #29)
    UnicodeWord,
}

impl TokenizerKind {
    /// Build the tokenizer for this kind.
    pub fn build(self) -> Arc<dyn Tokenizer> {
        match self {
            TokenizerKind::Alphanumeric => Arc::new(AlphanumericTokenizer::new()),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        }
    }
}

// Individual tokenizer modules
pub mod alphanumeric;
pub mod unicode_word;
pub mod utf8_runs;

pub use alphanumeric::AlphanumericTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use utf8_runs::Utf8RunTokens;
