//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase,
//! which is essential for case-insensitive search. ASCII text takes a fast
//! path; everything else uses the full Unicode lowercase mapping.
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::token::{IntoTokenStream, Token};
//! use keylookup::analysis::token_filter::Filter;
//! use keylookup::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("ÉCOLE", 1)];
//! let filtered: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "école");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (Unicode aware, including the
///   final form of sigma)
/// - Preserves token positions and offsets
/// - Records the original text on the token when lowercasing changed the
///   UTF-8 width of any character, e.g. `"KELVIN"` written with U+212A
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }

    /// Lowercase a single token.
    pub fn lowercase(token: Token) -> Token {
        if token.text.is_ascii() {
            let mut token = token;
            token.text.make_ascii_lowercase();
            return token;
        }

        let lowered = token.text.to_lowercase();
        if lowered == token.text {
            return token;
        }

        let widths_changed = lowered
            .chars()
            .map(char::len_utf8)
            .ne(token.text.chars().map(char::len_utf8));

        let mut token = token;
        let original = std::mem::replace(&mut token.text, lowered);
        if widths_changed && token.original_text.is_none() {
            token.original_text = Some(original);
        }
        token
    }
}

impl Filter for LowercaseFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(Self::lowercase)))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::IntoTokenStream;

    fn lowercase_all(tokens: Vec<Token>) -> Vec<Token> {
        LowercaseFilter::new()
            .filter(tokens.into_token_stream())
            .unwrap()
            .collect()
    }

    #[test]
    fn test_lowercase_filter() {
        let result = lowercase_all(vec![
            Token::with_offsets("Hello", 0, 0, 5),
            Token::with_offsets("WORLD", 1, 6, 11),
        ]);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!((result[1].start_offset, result[1].end_offset), (6, 11));
        assert!(result.iter().all(|t| t.original_text.is_none()));
    }

    #[test]
    fn test_unicode_lowercase() {
        let result = lowercase_all(vec![
            Token::new("ÀÉÎÕÜ", 0),
            Token::new("ΟΔΟΣ", 1),
            Token::new("ПРИВЕТ", 2),
        ]);

        assert_eq!(result[0].text, "àéîõü");
        assert_eq!(result[1].text, "οδος");
        assert_eq!(result[2].text, "привет");
        // Same character widths: nothing to remember
        assert!(result.iter().all(|t| t.original_text.is_none()));
    }

    #[test]
    fn test_width_change_keeps_original() {
        // U+212A KELVIN SIGN (3 bytes) lowercases to ASCII 'k' (1 byte)
        let result = lowercase_all(vec![Token::with_offsets("\u{212A}ILO", 0, 0, 6)]);

        assert_eq!(result[0].text, "kilo");
        assert_eq!(result[0].original_text.as_deref(), Some("\u{212A}ILO"));
        assert_eq!((result[0].start_offset, result[0].end_offset), (0, 6));
    }

    #[test]
    fn test_already_lowercase_is_unchanged() {
        let token = Token::with_offsets("straße", 3, 10, 17);
        let result = lowercase_all(vec![token.clone()]);

        assert_eq!(result[0], token);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
