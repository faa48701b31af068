//! N-gram analyzer for key lookup fields.
//!
//! Normalizes text into lowercase words and expands every word into its
//! character n-grams, so that a lookup on any fragment of a key (a product
//! name, a place name, a code) finds the documents containing it.
//!
//! # Pipeline
//!
//! 1. Tokenizer selected by [`AnalyzerConfig::tokenizer`]
//! 2. [`LowercaseFilter`]
//! 3. [`NGramTokenFilter`] configured by [`AnalyzerConfig::ngram`]
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::analyzer::{Analyzer, NGramAnalyzer};
//!
//! let analyzer = NGramAnalyzer::default(); // grams 3..=5, short words kept
//! let tokens: Vec<_> = analyzer.analyze("Go Nepal").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//!
//! assert_eq!(
//!     texts,
//!     vec!["go", "nep", "nepa", "nepal", "epa", "epal", "pal"]
//! );
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::ngram::NGramTokenFilter;
use crate::config::{AnalyzerConfig, NGramConfig};
use crate::error::Result;

/// An analyzer that lowercases words and expands them into n-grams.
#[derive(Clone)]
pub struct NGramAnalyzer {
    inner: PipelineAnalyzer,
    config: AnalyzerConfig,
}

impl NGramAnalyzer {
    /// Create a new n-gram analyzer from a configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        log::debug!(
            "building ngram analyzer: tokenizer={:?} min_gram={} max_gram={} preserve_original={}",
            config.tokenizer,
            config.ngram.min_gram(),
            config.ngram.max_gram(),
            config.ngram.preserve_original()
        );

        let inner = PipelineAnalyzer::new(config.tokenizer.build())
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(NGramTokenFilter::new(config.ngram)))
            .with_name("ngram");

        NGramAnalyzer { inner, config }
    }

    /// Create a new n-gram analyzer with the default tokenizer and the given
    /// gram settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_gram` is 0 or `max_gram` is less
    /// than `min_gram`.
    pub fn with_grams(min_gram: usize, max_gram: usize, preserve_original: bool) -> Result<Self> {
        let ngram = NGramConfig::new(min_gram, max_gram, preserve_original)?;
        Ok(Self::new(AnalyzerConfig::new(ngram)))
    }

    /// Get the configuration this analyzer was built from.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for NGramAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer for NGramAnalyzer {
    fn analyze<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        self.inner.analyze(text)
    }

    fn analyze_bytes<'a>(&self, bytes: &'a [u8]) -> Result<TokenStream<'a>> {
        self.inner.analyze_bytes(bytes)
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

impl std::fmt::Debug for NGramAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NGramAnalyzer")
            .field("config", &self.config)
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenType};
    use crate::analysis::tokenizer::TokenizerKind;

    #[test]
    fn test_ngram_analyzer() {
        let analyzer = NGramAnalyzer::default();
        let tokens: Vec<Token> = analyzer.analyze("ABCD").unwrap().collect();

        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.start_offset, t.end_offset, t.position_increment))
            .collect();
        assert_eq!(
            summary,
            vec![("abc", 0, 3, 1), ("abcd", 0, 4, 0), ("bcd", 1, 4, 0)]
        );
    }

    #[test]
    fn test_with_grams_validation() {
        assert!(NGramAnalyzer::with_grams(0, 3, true).is_err());
        assert!(NGramAnalyzer::with_grams(4, 3, true).is_err());

        let analyzer = NGramAnalyzer::with_grams(2, 2, false).unwrap();
        assert_eq!(analyzer.config().ngram.min_gram(), 2);
        assert_eq!(analyzer.config().tokenizer, TokenizerKind::Alphanumeric);
    }

    #[test]
    fn test_short_words_dropped_without_preserve() {
        let analyzer = NGramAnalyzer::with_grams(3, 5, false).unwrap();
        let tokens: Vec<Token> = analyzer.analyze("a bc defg").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["def", "defg", "efg"]);
        assert_eq!(tokens[0].position, 2);
        assert_eq!(tokens[0].position_increment, 3);
    }

    #[test]
    fn test_unicode_word_config() {
        let config = AnalyzerConfig::new(NGramConfig::default())
            .with_tokenizer(TokenizerKind::UnicodeWord);
        let analyzer = NGramAnalyzer::new(config);
        let tokens: Vec<Token> = analyzer.analyze("It's").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["it'", "it's", "t's"]);
        assert!(tokens.iter().all(|t| t.token_type == TokenType::NGram));
    }

    #[test]
    fn test_reuse_does_not_leak_state() {
        let analyzer = NGramAnalyzer::default();
        let first: Vec<Token> = analyzer.analyze("Kathmandu").unwrap().collect();
        let _other: Vec<Token> = analyzer.analyze("a b c").unwrap().collect();
        let again: Vec<Token> = analyzer.analyze("Kathmandu").unwrap().collect();

        assert_eq!(first, again);
    }

    #[test]
    fn test_analyzer_name_and_debug() {
        let analyzer = NGramAnalyzer::default();
        assert_eq!(analyzer.name(), "ngram");
        assert_eq!(analyzer.inner().filters().len(), 2);
        assert!(format!("{analyzer:?}").contains("NGramAnalyzer"));
    }
}
