//! Token types for text analysis.
//!
//! This module defines the data structures that flow through the analysis
//! pipeline: the [`Token`] itself, its [`TokenType`], and the lazy
//! [`TokenStream`] that stages hand to each other.
//!
//! # Positions
//!
//! Every token carries an absolute `position` (the index of the word it was
//! derived from) and a `position_increment` relative to the previously
//! emitted token. N-grams of one word share that word's position:
//!
//! ```text
//! Input: "Hello World", grams 3..=4
//!
//!   "hel"  (pos=0, pos_inc=1)
//!   "hell" (pos=0, pos_inc=0)
//!   "ell"  (pos=0, pos_inc=0)
//!   ...
//!   "wor"  (pos=1, pos_inc=1)
//! ```
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.position_increment, 1);
//! assert_eq!(token.token_type, TokenType::Word);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Word position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `position_increment` - Position relative to the previous token (default: 1)
/// - `token_type` - Whether this is a word or an n-gram
/// - `original_text` - Text before normalization, when normalization changed
///   character widths
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the word this token was derived from (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1: next position
    /// - 0: same position as the previous token (further n-grams of a word)
    /// - >1: positions were skipped (words that produced no tokens)
    pub position_increment: usize,

    /// Token type classification
    pub token_type: TokenType,

    /// The text of the original span before normalization.
    ///
    /// Only set when normalization changed the UTF-8 width of a character, so
    /// that later stages can still map character indices to byte offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// A (normalized) word, including a short word kept whole by the n-gram filter
    Word,
    /// A substring emitted by the n-gram filter
    NGram,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            token_type: TokenType::Word,
            original_text: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the original text.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        self.original_text = Some(original.into());
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// The text of the original span: `original_text` if recorded, else `text`.
    pub fn source_text(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Word => write!(f, "word"),
            TokenType::NGram => write!(f, "ngram"),
        }
    }
}

/// A lazy sequence of tokens borrowing from the analyzed input.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + Send + 'a>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream<'a> {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'a>;
}

impl<'a> IntoTokenStream<'a> for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'a> {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.position_increment, 1);
        assert_eq!(token.token_type, TokenType::Word);
        assert!(token.original_text.is_none());
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_builders() {
        let token = Token::with_offsets("straße", 0, 0, 7)
            .with_original_text("STRAẞE")
            .with_token_type(TokenType::NGram)
            .with_position_increment(0);

        assert_eq!(token.token_type, TokenType::NGram);
        assert_eq!(token.position_increment, 0);
        assert_eq!(token.source_text(), "STRAẞE");
        assert_eq!(Token::new("plain", 0).source_text(), "plain");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
        assert_eq!(TokenType::NGram.to_string(), "ngram");
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::with_offsets("kat", 0, 0, 3).with_token_type(TokenType::NGram);
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["text"], "kat");
        assert_eq!(json["token_type"], "ngram");
        assert!(json.get("original_text").is_none());

        let back: Token = serde_json::from_value(json).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
