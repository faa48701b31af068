//! Text analysis module for keylookup.
//!
//! This module turns raw text into the tokens a key lookup index stores:
//!
//! - **Tokenizers**: Break text into word tokens
//! - **Token Filters**: Lowercase words and expand them into n-grams
//! - **Analyzers**: Combine a tokenizer and filters into a pipeline
//!
//! # Architecture
//!
//! ```text
//! Text → Tokenizer → Token Stream → Token Filters → Analyzed Tokens
//! ```
//!
//! Every stage is lazy: tokens are produced on demand while the consumer
//! iterates, and every call starts from a fresh cursor.
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::{Analyzer, NGramAnalyzer};
//!
//! let analyzer = NGramAnalyzer::default();
//! let tokens: Vec<_> = analyzer.analyze("Kathmandu").unwrap().collect();
//! assert_eq!(tokens[0].text, "kat");
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, NGramAnalyzer, Normalizer, PipelineAnalyzer};
pub use token::{IntoTokenStream, Token, TokenStream, TokenType};
pub use token_filter::{Filter, LowercaseFilter, NGramTokenFilter};
pub use tokenizer::{
    AlphanumericTokenizer, Tokenizer, TokenizerKind, UnicodeWordTokenizer, Utf8RunTokens,
};
