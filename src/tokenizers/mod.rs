//! Tokenizers
//!
//! Split strings into ordered token sequences for the vector-space metrics.
//! Whitespace words and character q-grams are supported; every tokenizer
//! consults a [`TermFilter`] before emitting a token.

pub mod filter;
pub mod qgram;
pub mod utilities;
pub mod whitespace;

use std::collections::BTreeSet;
use std::fmt;

pub use filter::{NoFilter, StopTermFilter, TermFilter};
pub use qgram::QGram;
pub use utilities::{term_frequencies, TokenCounts, TokenSetUtilities};
pub use whitespace::Whitespace;

/// Splits a word into tokens.
///
/// Implementations are deterministic: tokenizing the same input twice yields
/// the same sequence.
pub trait Tokenizer: fmt::Debug + Send + Sync {
    /// Short human-readable name of the tokenizer
    fn short_description(&self) -> String;

    /// Characters treated as token boundaries (empty for q-gram tokenizers)
    fn delimiters(&self) -> &str;

    /// Ordered token sequence, duplicates preserved
    fn tokenize(&self, word: &str) -> Vec<String>;

    /// De-duplicated tokens
    fn tokenize_to_set(&self, word: &str) -> BTreeSet<String> {
        self.tokenize(word).into_iter().collect()
    }
}
