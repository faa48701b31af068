//! # keylookup
//!
//! N-gram text analysis for key lookup indexing.
//!
//! Raw text is split into words, lowercased and expanded into overlapping
//! character n-grams. Every token keeps byte offsets into the original text
//! and a position increment, so an index can support substring lookups as
//! well as phrase and proximity queries.
//!
//! ## Features
//!
//! - Lazy token streams: tokens are produced while the caller iterates
//! - Unicode aware segmentation and lowercasing
//! - Exact offsets into the original input, also for malformed UTF-8 bytes
//! - Validated, serializable configuration
//!
//! ## Example
//!
//! ```
//! use keylookup::config::NGramConfig;
//!
//! let config = NGramConfig::new(3, 5, true).unwrap();
//! let tokens: Vec<_> = keylookup::tokenize("Kathmandu", &config).unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "kat");
//! assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 3));
//! assert_eq!(tokens.len(), 18);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

use crate::analysis::analyzer::{Analyzer, NGramAnalyzer};
use crate::analysis::token::TokenStream;
use crate::config::{AnalyzerConfig, NGramConfig};
use crate::error::Result;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize `text` into lowercase n-gram tokens.
///
/// Words are maximal runs of alphanumeric characters. The stream is lazy and
/// borrows `text`. Built-in stages never fail; the `Result` only carries
/// errors of the analysis traits.
pub fn tokenize<'a>(text: &'a str, config: &NGramConfig) -> Result<TokenStream<'a>> {
    NGramAnalyzer::new(AnalyzerConfig::new(*config)).analyze(text)
}

/// Tokenize raw bytes into lowercase n-gram tokens.
///
/// Malformed UTF-8 sequences act as word separators; offsets are byte
/// offsets into `bytes`. Positions and increments equal those of `tokenize`
/// over the input decoded with U+FFFD replacement characters. Valid runs are
/// tokenized as the stream is consumed.
pub fn tokenize_bytes<'a>(bytes: &'a [u8], config: &NGramConfig) -> Result<TokenStream<'a>> {
    NGramAnalyzer::new(AnalyzerConfig::new(*config)).analyze_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenType};

    #[test]
    fn test_tokenize_scenarios() {
        let config = NGramConfig::default();

        let tokens: Vec<Token> = tokenize("hi", &config).unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "hi");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));

        assert_eq!(tokenize("", &config).unwrap().count(), 0);

        let tokens: Vec<Token> = tokenize("a1 b2!", &config).unwrap().collect();
        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.start_offset, t.end_offset, t.token_type))
            .collect();
        assert_eq!(
            summary,
            vec![("a1", 0, 2, TokenType::Word), ("b2", 3, 5, TokenType::Word)]
        );
    }

    #[test]
    fn test_tokenize_bytes() {
        let config = NGramConfig::new(2, 2, true).unwrap();
        let tokens: Vec<Token> = tokenize_bytes(b"AB\x80CD", &config).unwrap().collect();
        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.start_offset, t.end_offset))
            .collect();

        assert_eq!(summary, vec![("ab", 0, 2), ("cd", 3, 5)]);
    }
}
