//! N-gram token filter implementation.
//!
//! Expands every word token into all of its contiguous substrings whose length
//! (in characters) lies within `[min_gram, max_gram]`. Grams are emitted grouped
//! by start index, shortest first within a start index. Offsets are absolute
//! byte offsets into the original input.
//!
//! N-grams are useful for:
//! - Substring and partial key matching
//! - Fuzzy lookup of product names and codes
//! - Languages without word separators
//!
//! # Examples
//!
//! ```
//! use keylookup::analysis::token::{IntoTokenStream, Token};
//! use keylookup::analysis::token_filter::Filter;
//! use keylookup::analysis::token_filter::ngram::NGramTokenFilter;
//!
//! let filter = NGramTokenFilter::with_grams(2, 3, true).unwrap();
//! let tokens = vec![Token::with_offsets("abcd", 0, 10, 14)];
//! let grams: Vec<_> = filter.filter(tokens.into_token_stream())
//!     .unwrap()
//!     .map(|t| (t.text, t.start_offset, t.end_offset))
//!     .collect();
//!
//! assert_eq!(grams, vec![
//!     ("ab".to_string(), 10, 12),
//!     ("abc".to_string(), 10, 13),
//!     ("bc".to_string(), 11, 13),
//!     ("bcd".to_string(), 11, 14),
//!     ("cd".to_string(), 12, 14),
//! ]);
//! ```

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::config::NGramConfig;
use crate::error::Result;

/// A filter that generates character n-grams from word tokens.
///
/// # Position increments
///
/// The first token emitted for a word carries the word's increment; all
/// other n-grams of the same word carry 0. Increments of words that emit
/// nothing (too short without `preserve_original`) are added to the next
/// emitted token, so positions stay consistent.
///
/// # Long words
///
/// With [`NGramConfig::preserve_long`] set, a word longer than `max_gram` is
/// also emitted whole, as a [`TokenType::Word`] with increment 0, right after
/// its last n-gram.
///
/// # Offsets
///
/// Character indices are mapped back to the original text. When lowercasing
/// changed the number of characters of a word, exact per-gram offsets do not
/// exist and every token of that word carries the word's offsets instead.
#[derive(Clone, Debug, Default)]
pub struct NGramTokenFilter {
    config: NGramConfig,
}

impl NGramTokenFilter {
    /// Create a new n-gram filter from a validated configuration.
    pub fn new(config: NGramConfig) -> Self {
        NGramTokenFilter { config }
    }

    /// Create a new n-gram filter from raw bounds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_gram` is 0 or `max_gram` is less
    /// than `min_gram`.
    pub fn with_grams(min_gram: usize, max_gram: usize, preserve_original: bool) -> Result<Self> {
        Ok(Self::new(NGramConfig::new(
            min_gram,
            max_gram,
            preserve_original,
        )?))
    }

    /// Get the configuration.
    pub fn config(&self) -> &NGramConfig {
        &self.config
    }
}

impl Filter for NGramTokenFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(NGramTokens {
            input: tokens,
            config: self.config,
            current: None,
            pending_increment: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

struct NGramTokens<'a> {
    input: TokenStream<'a>,
    config: NGramConfig,
    current: Option<WordGrams>,
    /// Increments of dropped words, owed to the next emitted token.
    pending_increment: usize,
}

impl Iterator for NGramTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(grams) = self.current.as_mut() {
                if let Some(token) = grams.next_gram(&self.config) {
                    return Some(token);
                }
                self.current = None;
            }

            let word = self.input.next()?;
            let increment = self.pending_increment + word.position_increment;
            let len = word.text.chars().count();

            if len == 0 {
                self.pending_increment = increment;
                continue;
            }

            if len < self.config.min_gram() {
                if self.config.preserve_original() {
                    self.pending_increment = 0;
                    let mut token = word
                        .with_token_type(TokenType::Word)
                        .with_position_increment(increment);
                    token.original_text = None;
                    return Some(token);
                }
                self.pending_increment = increment;
                continue;
            }

            self.pending_increment = 0;
            let keep_whole = self.config.preserve_long() && len > self.config.max_gram();
            self.current = Some(WordGrams::new(
                word,
                increment,
                self.config.min_gram(),
                keep_whole,
            ));
        }
    }
}

/// Enumeration state for the grams of one word.
struct WordGrams {
    word: Token,
    /// Byte index of every character in `word.text`, plus its length.
    text_bounds: Vec<usize>,
    /// Absolute original offset of every character boundary, when exact.
    offset_bounds: Option<Vec<usize>>,
    start: usize,
    gram: usize,
    increment: usize,
    /// Emit the word itself once its grams are exhausted.
    keep_whole: bool,
}

impl WordGrams {
    fn new(word: Token, increment: usize, min_gram: usize, keep_whole: bool) -> Self {
        let text_bounds = char_bounds(&word.text, 0);
        let offset_bounds = Some(char_bounds(word.source_text(), word.start_offset))
            .filter(|bounds| bounds.len() == text_bounds.len())
            .filter(|bounds| bounds.last() == Some(&word.end_offset));

        if offset_bounds.is_none() {
            log::debug!(
                "character count of {:?} changed by normalization, using word offsets for its grams",
                word.text
            );
        }

        WordGrams {
            word,
            text_bounds,
            offset_bounds,
            start: 0,
            gram: min_gram,
            increment,
            keep_whole,
        }
    }

    fn next_gram(&mut self, config: &NGramConfig) -> Option<Token> {
        let len = self.text_bounds.len() - 1;

        while self.start < len {
            let end = self.start + self.gram;
            if self.gram <= config.max_gram() && end <= len {
                let token = self.make_token(self.start, end);
                self.gram += 1;
                return Some(token);
            }
            self.start += 1;
            self.gram = config.min_gram();
        }

        if std::mem::take(&mut self.keep_whole) {
            let mut token = self
                .word
                .clone()
                .with_token_type(TokenType::Word)
                .with_position_increment(std::mem::take(&mut self.increment));
            token.original_text = None;
            return Some(token);
        }
        None
    }

    fn make_token(&mut self, start: usize, end: usize) -> Token {
        let text = &self.word.text[self.text_bounds[start]..self.text_bounds[end]];
        let (start_offset, end_offset) = match &self.offset_bounds {
            Some(bounds) => (bounds[start], bounds[end]),
            None => (self.word.start_offset, self.word.end_offset),
        };

        let increment = std::mem::take(&mut self.increment);
        Token::with_offsets(text, self.word.position, start_offset, end_offset)
            .with_token_type(TokenType::NGram)
            .with_position_increment(increment)
    }
}

/// Byte offsets (shifted by `base`) of every character boundary of `text`.
fn char_bounds(text: &str, base: usize) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| base + offset)
        .chain(std::iter::once(base + text.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::IntoTokenStream;

    fn grams(filter: &NGramTokenFilter, tokens: Vec<Token>) -> Vec<Token> {
        filter.filter(tokens.into_token_stream()).unwrap().collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_ngram_creation() {
        assert!(NGramTokenFilter::with_grams(2, 3, true).is_ok());
        assert!(NGramTokenFilter::with_grams(0, 2, true).is_err());
        assert!(NGramTokenFilter::with_grams(3, 2, true).is_err());
        assert_eq!(NGramTokenFilter::default().config(), &NGramConfig::default());
    }

    #[test]
    fn test_bigram() {
        let filter = NGramTokenFilter::with_grams(2, 2, false).unwrap();
        let tokens = grams(&filter, vec![Token::with_offsets("hello", 0, 0, 5)]);

        assert_eq!(texts(&tokens), vec!["he", "el", "ll", "lo"]);
        assert!(tokens.iter().all(|t| t.token_type == TokenType::NGram));
    }

    #[test]
    fn test_enumeration_order() {
        let filter = NGramTokenFilter::with_grams(2, 3, false).unwrap();
        let tokens = grams(&filter, vec![Token::with_offsets("abc", 0, 0, 3)]);

        assert_eq!(texts(&tokens), vec!["ab", "abc", "bc"]);
    }

    #[test]
    fn test_default_range_on_word() {
        let filter = NGramTokenFilter::default();
        let tokens = grams(&filter, vec![Token::with_offsets("abcdef", 0, 0, 6)]);

        assert_eq!(
            texts(&tokens),
            vec![
                "abc", "abcd", "abcde", "bcd", "bcde", "bcdef", "cde", "cdef", "def"
            ]
        );
        assert_eq!(tokens.len(), NGramConfig::default().gram_count(6));
    }

    #[test]
    fn test_position_increments() {
        let filter = NGramTokenFilter::default();
        let tokens = grams(
            &filter,
            vec![
                Token::with_offsets("abcd", 0, 0, 4),
                Token::with_offsets("efg", 1, 5, 8),
            ],
        );

        let increments: Vec<_> = tokens.iter().map(|t| t.position_increment).collect();
        assert_eq!(texts(&tokens), vec!["abc", "abcd", "bcd", "efg"]);
        assert_eq!(increments, vec![1, 0, 0, 1]);
        assert_eq!(
            tokens.iter().map(|t| t.position).collect::<Vec<_>>(),
            vec![0, 0, 0, 1]
        );
    }

    #[test]
    fn test_preserve_original_short_word() {
        let filter = NGramTokenFilter::default();
        let tokens = grams(&filter, vec![Token::with_offsets("hi", 0, 0, 2)]);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "hi");
        assert_eq!(tokens[0].token_type, TokenType::Word);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));
        assert_eq!(tokens[0].position_increment, 1);
    }

    #[test]
    fn test_dropped_words_carry_increment() {
        let filter = NGramTokenFilter::with_grams(3, 3, false).unwrap();
        let tokens = grams(
            &filter,
            vec![
                Token::with_offsets("a", 0, 0, 1),
                Token::with_offsets("bc", 1, 2, 4),
                Token::with_offsets("def", 2, 5, 8),
            ],
        );

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "def");
        assert_eq!(tokens[0].position, 2);
        assert_eq!(tokens[0].position_increment, 3);
    }

    #[test]
    fn test_empty_word_emits_nothing() {
        let filter = NGramTokenFilter::default();
        let tokens = grams(
            &filter,
            vec![
                Token::with_offsets("", 0, 0, 0),
                Token::with_offsets("xyz", 1, 1, 4),
            ],
        );

        assert_eq!(texts(&tokens), vec!["xyz"]);
        assert_eq!(tokens[0].position_increment, 2);
    }

    #[test]
    fn test_multibyte_offsets() {
        let filter = NGramTokenFilter::with_grams(2, 2, false).unwrap();
        // "日本語" starts at byte 4 of some input
        let tokens = grams(&filter, vec![Token::with_offsets("日本語", 0, 4, 13)]);

        assert_eq!(texts(&tokens), vec!["日本", "本語"]);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (4, 10));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 13));
    }

    #[test]
    fn test_offsets_follow_original_widths() {
        let filter = NGramTokenFilter::with_grams(2, 2, false).unwrap();
        // Lowercased from "\u{212A}ILO": the first character was 3 bytes wide
        let word = Token::with_offsets("kilo", 0, 0, 6).with_original_text("\u{212A}ILO");
        let tokens = grams(&filter, vec![word]);

        assert_eq!(texts(&tokens), vec!["ki", "il", "lo"]);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 4));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (3, 5));
        assert!(tokens.iter().all(|t| t.original_text.is_none()));
    }

    #[test]
    fn test_character_count_change_falls_back_to_word_offsets() {
        let filter = NGramTokenFilter::with_grams(2, 2, false).unwrap();
        // "İ" (U+0130) lowercases to "i" followed by U+0307: one character becomes two
        let word = Token::with_offsets("i\u{307}st", 0, 0, 4).with_original_text("İST");
        let tokens = grams(&filter, vec![word]);

        assert_eq!(tokens.len(), 3);
        assert!(
            tokens
                .iter()
                .all(|t| (t.start_offset, t.end_offset) == (0, 4))
        );
        assert_eq!(tokens[0].position_increment, 1);
        assert!(tokens[1..].iter().all(|t| t.position_increment == 0));
    }

    #[test]
    fn test_preserve_long_emits_whole_word_last() {
        let config = NGramConfig::new(2, 3, false).unwrap().with_preserve_long(true);
        let filter = NGramTokenFilter::new(config);
        let tokens = grams(
            &filter,
            vec![
                Token::with_offsets("abcd", 0, 0, 4),
                Token::with_offsets("xyz", 1, 5, 8),
            ],
        );

        assert_eq!(
            texts(&tokens),
            vec!["ab", "abc", "bc", "bcd", "cd", "abcd", "xy", "xyz", "yz"]
        );
        let whole = &tokens[5];
        assert_eq!(whole.token_type, TokenType::Word);
        assert_eq!((whole.start_offset, whole.end_offset), (0, 4));
        assert_eq!((whole.position, whole.position_increment), (0, 0));
        // "xyz" fits within max_gram, so only its n-grams are emitted
        assert_eq!(tokens[6].position_increment, 1);
        assert!(tokens[6..].iter().all(|t| t.token_type == TokenType::NGram));
    }

    #[test]
    fn test_preserve_long_off_by_default() {
        let filter = NGramTokenFilter::with_grams(2, 2, true).unwrap();
        let tokens = grams(&filter, vec![Token::with_offsets("abc", 0, 0, 3)]);
        assert_eq!(texts(&tokens), vec!["ab", "bc"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NGramTokenFilter::default().name(), "ngram");
    }
}
