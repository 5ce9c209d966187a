//! Penn Treebank style tokenization.
//!
//! This module turns raw English text into word and punctuation tokens. The
//! text is rewritten by an ordered cascade of pattern rules that insert spaces
//! around punctuation, normalize quotes and split contractions, and the result
//! is then split on whitespace.

pub mod cascade;
pub mod rule;

use std::io::Read;

pub use cascade::{Cascade, Step, TraceStep, PENN_TREEBANK};
pub use rule::{Replacement, Rule};

use crate::error::{TokenizerError, TokenizerResult};

/// Tokenizer driven by a rewrite cascade
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'c> {
    cascade: &'c Cascade,
}

impl Tokenizer<'static> {
    /// Tokenizer using the built-in Penn Treebank cascade
    pub fn new() -> Self {
        Self {
            cascade: &PENN_TREEBANK,
        }
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Tokenizer<'c> {
    pub fn with_cascade(cascade: &'c Cascade) -> Self {
        Self { cascade }
    }

    pub fn cascade(&self) -> &'c Cascade {
        self.cascade
    }

    /// The fully rewritten buffer, before the final split
    pub fn rewrite(&self, text: &str) -> String {
        self.cascade.rewrite(text)
    }

    /// Tokenize a string
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let tokens = split_tokens(&self.rewrite(text));
        log::debug!(
            "tokenized {} bytes into {} tokens",
            text.len(),
            tokens.len()
        );
        tokens
    }

    /// Tokenize raw bytes, rejecting anything that is not UTF-8 before any rule runs
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> TokenizerResult<Vec<String>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| TokenizerError::invalid_utf8(e.valid_up_to()))?;
        Ok(self.tokenize(text))
    }

    /// Read everything from `reader` and tokenize it
    pub fn tokenize_reader<R: Read>(&self, mut reader: R) -> TokenizerResult<Vec<String>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.tokenize_bytes(&bytes)
    }

    /// Record the buffer after every cascade step
    pub fn trace(&self, text: &str) -> Vec<TraceStep> {
        self.cascade.trace(text)
    }
}

/// Tokenize a string with the Penn Treebank cascade
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

/// Tokenize raw bytes with the Penn Treebank cascade
pub fn tokenize_bytes(bytes: &[u8]) -> TokenizerResult<Vec<String>> {
    Tokenizer::new().tokenize_bytes(bytes)
}

/// Split a rewritten buffer into tokens.
///
/// Leading and trailing whitespace is dropped and runs of whitespace act as a
/// single separator, so no token is ever empty.
pub fn split_tokens(buffer: &str) -> Vec<String> {
    buffer.split_whitespace().map(str::to_owned).collect()
}
