//! Tokenization of raw bytes that may contain malformed UTF-8.
//!
//! The input is walked lazily one [`Utf8Chunk`](std::str::Utf8Chunk) at a
//! time. Every valid run goes through the wrapped tokenizer; every malformed
//! sequence stands for U+FFFD REPLACEMENT CHARACTER, which is not
//! alphanumeric and therefore only separates words.
//!
//! Offsets are rebased onto the whole byte input and word positions continue
//! across runs, so the filters downstream see one word stream, exactly as if
//! the input had been decoded with replacement characters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use keylookup::analysis::tokenizer::AlphanumericTokenizer;
//! use keylookup::analysis::tokenizer::utf8_runs::Utf8RunTokens;
//!
//! let tokens: Vec<_> = Utf8RunTokens::new(Arc::new(AlphanumericTokenizer::new()), b"ab\xFFcd")
//!     .collect();
//!
//! assert_eq!(tokens[1].text, "cd");
//! assert_eq!((tokens[1].start_offset, tokens[1].position), (3, 1));
//! ```

use std::str::Utf8Chunks;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// Lazy word stream over a byte input.
pub struct Utf8RunTokens<'a> {
    tokenizer: Arc<dyn Tokenizer>,
    chunks: Utf8Chunks<'a>,
    /// Byte offset of the next chunk.
    offset: usize,
    /// Word stream of the current valid run and its byte offset.
    current: Option<(usize, TokenStream<'a>)>,
    /// Word position of the first word of the current run.
    position_base: usize,
    /// Word position following the last word seen.
    next_position: usize,
}

impl<'a> Utf8RunTokens<'a> {
    /// Create a word stream over `bytes` using `tokenizer` for valid runs.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, bytes: &'a [u8]) -> Self {
        Utf8RunTokens {
            tokenizer,
            chunks: bytes.utf8_chunks(),
            offset: 0,
            current: None,
            position_base: 0,
            next_position: 0,
        }
    }

    /// Advance to the next non-empty valid run. Returns false at end of input.
    ///
    /// A tokenizer error ends the stream; it is logged since iteration cannot
    /// return it.
    fn next_run(&mut self) -> bool {
        while let Some(chunk) = self.chunks.next() {
            let valid = chunk.valid();
            let start = self.offset;
            self.offset += valid.len();

            let invalid = chunk.invalid();
            if !invalid.is_empty() {
                log::warn!(
                    "replacing {} malformed UTF-8 byte(s) at offset {} with U+FFFD",
                    invalid.len(),
                    self.offset
                );
                self.offset += invalid.len();
            }

            if valid.is_empty() {
                continue;
            }

            match self.tokenizer.tokenize(valid) {
                Ok(stream) => {
                    self.current = Some((start, stream));
                    self.position_base = self.next_position;
                    return true;
                }
                Err(e) => {
                    log::error!(
                        "{} tokenizer failed on bytes {}..{}: {}",
                        self.tokenizer.name(),
                        start,
                        start + valid.len(),
                        e
                    );
                    self.chunks = b"".utf8_chunks();
                    return false;
                }
            }
        }
        false
    }
}

impl Iterator for Utf8RunTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some((offset, stream)) = self.current.as_mut() {
                if let Some(mut token) = stream.next() {
                    token.start_offset += *offset;
                    token.end_offset += *offset;
                    token.position += self.position_base;
                    self.next_position = token.position + 1;
                    return Some(token);
                }
                self.current = None;
            }

            if !self.next_run() {
                return None;
            }
        }
    }
}
