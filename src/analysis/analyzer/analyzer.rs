//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis. Analyzers combine a tokenizer and filters to transform raw text
//! into index tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`Normalizer`](super::normalizer::Normalizer) - Word segmentation + lowercasing
//! - [`NGramAnalyzer`](super::ngram::NGramAnalyzer) - Normalizer followed by n-gram expansion
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::analyzer::{Analyzer, Normalizer};
//!
//! let analyzer = Normalizer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so that one analyzer can serve concurrent
/// indexing threads. Each call builds a fresh stream; nothing is shared
/// between calls.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a lazy stream of tokens.
    fn analyze<'a>(&self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Analyze raw bytes that may contain malformed UTF-8.
    ///
    /// Every malformed sequence stands for U+FFFD REPLACEMENT CHARACTER, which
    /// separates words and never appears in a token. Offsets are byte offsets
    /// into `bytes`. Positions and increments are those of the same input
    /// decoded with replacement characters. The stream is lazy: valid runs are
    /// tokenized as iteration reaches them.
    ///
    /// # Examples
    ///
    /// ```
    /// use keylookup::analysis::analyzer::{Analyzer, Normalizer};
    ///
    /// let analyzer = Normalizer::new();
    /// let tokens: Vec<_> = analyzer.analyze_bytes(b"ab\xFFcd").unwrap().collect();
    ///
    /// assert_eq!(tokens.len(), 2);
    /// assert_eq!((tokens[1].text.as_str(), tokens[1].start_offset, tokens[1].position), ("cd", 3, 1));
    /// ```
    fn analyze_bytes<'a>(&self, bytes: &'a [u8]) -> Result<TokenStream<'a>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
