//! Treebank Tokenizer Library
//!
//! This library splits English text into Penn Treebank style tokens.

pub mod error;
pub mod tokenizer;

// Re-export commonly used types
pub use error::{InputError, RuleError, TokenizerError, TokenizerResult};
pub use tokenizer::{
    split_tokens, tokenize, tokenize_bytes, Cascade, Replacement, Rule, Step, Tokenizer,
    TraceStep, PENN_TREEBANK,
};
