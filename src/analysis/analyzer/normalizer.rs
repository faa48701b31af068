//! Normalizer: word segmentation followed by lowercasing.
//!
//! The normalizer turns raw text into lowercase word tokens. Separators
//! (whitespace, punctuation, symbols) never produce tokens, and offsets always
//! point at the original, un-lowercased text.
//!
//! # Pipeline
//!
//! 1. [`AlphanumericTokenizer`](crate::analysis::tokenizer::AlphanumericTokenizer)
//!    (or the tokenizer selected by [`TokenizerKind`])
//! 2. [`LowercaseFilter`]
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::analyzer::{Analyzer, Normalizer};
//!
//! let normalizer = Normalizer::new();
//! let tokens: Vec<_> = normalizer.analyze("Zürich, ZUG & Bern").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["zürich", "zug", "bern"]);
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (9, 12));
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::TokenizerKind;
use crate::error::Result;

/// An analyzer producing lowercase word tokens.
#[derive(Clone)]
pub struct Normalizer {
    inner: PipelineAnalyzer,
}

impl Normalizer {
    /// Create a normalizer with the default alphanumeric segmentation.
    pub fn new() -> Self {
        Self::with_tokenizer(TokenizerKind::default())
    }

    /// Create a normalizer with the given segmentation.
    pub fn with_tokenizer(kind: TokenizerKind) -> Self {
        let inner = PipelineAnalyzer::new(kind.build())
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("normalizer");

        Normalizer { inner }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for Normalizer {
    fn analyze<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        self.inner.analyze(text)
    }

    fn analyze_bytes<'a>(&self, bytes: &'a [u8]) -> Result<TokenStream<'a>> {
        self.inner.analyze_bytes(bytes)
    }

    fn name(&self) -> &'static str {
        "normalizer"
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("inner", &self.inner)
            .finish()
    }
}
