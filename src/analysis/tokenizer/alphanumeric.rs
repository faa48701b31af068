//! Alphanumeric run tokenizer.
//!
//! Splits text into maximal runs of alphanumeric characters (Unicode
//! `Alphabetic` or `Numeric`). Every other character is a separator and never
//! appears in a token.
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::tokenizer::Tokenizer;
//! use keylookup::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
//!
//! let tokenizer = AlphanumericTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("a1 b2!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "a1");
//! assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));
//! assert_eq!(tokens[1].text, "b2");
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (3, 5));
//! ```

use std::str::CharIndices;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits maximal runs of alphanumeric characters.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericTokenizer;

impl AlphanumericTokenizer {
    /// Create a new alphanumeric tokenizer.
    pub fn new() -> Self {
        AlphanumericTokenizer
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(Box::new(AlphanumericTokens {
            text,
            chars: text.char_indices(),
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}

/// Cursor over one input; created fresh by every `tokenize` call.
struct AlphanumericTokens<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    position: usize,
}

impl Iterator for AlphanumericTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let start = loop {
            let (offset, c) = self.chars.next()?;
            if c.is_alphanumeric() {
                break offset;
            }
        };

        // The separator ending the run is consumed here.
        let mut end = self.text.len();
        for (offset, c) in self.chars.by_ref() {
            if !c.is_alphanumeric() {
                end = offset;
                break;
            }
        }

        let token = Token::with_offsets(&self.text[start..end], self.position, start, end);
        self.position += 1;
        Some(token)
    }
}
