//! Token filter implementations for token transformation.
//!
//! Filters consume the lazy stream produced by the previous stage and return a
//! new lazy stream, so a chain of filters never materializes the whole token
//! sequence.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`ngram::NGramTokenFilter`] - Expands words into character n-grams
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::token::{IntoTokenStream, Token};
//! use keylookup::analysis::token_filter::Filter;
//! use keylookup::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → NGram → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Implementations copy whatever configuration they need into the returned
/// stream, so the stream only borrows the analyzed text.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use keylookup::analysis::token::TokenStream;
/// use keylookup::analysis::token_filter::Filter;
/// use keylookup::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
///         Ok(Box::new(tokens.map(|mut t| {
///             t.text = t.text.chars().rev().collect();
///             t
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod ngram;

pub use lowercase::LowercaseFilter;
pub use ngram::NGramTokenFilter;
