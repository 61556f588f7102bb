//! Whitespace Tokenizer
//!
//! Splits on carriage return, newline, tab, space and non-breaking space.

use super::filter::{NoFilter, TermFilter};
use super::Tokenizer;

/// Default delimiter set
pub const WHITESPACE_DELIMITERS: &str = "\r\n\t \u{00A0}";

/// Word tokenizer.
///
/// Scanning skips exactly one delimiter before reading the next term, so runs
/// of delimiters and a trailing delimiter produce empty tokens:
/// `"a  b"` yields `["a", "", "b"]` and `"a "` yields `["a", ""]`.
#[derive(Debug)]
pub struct Whitespace {
    filter: Box<dyn TermFilter>,
}

impl Default for Whitespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Whitespace {
    pub fn new() -> Self {
        Self::with_filter(Box::new(NoFilter))
    }

    pub fn with_filter(filter: Box<dyn TermFilter>) -> Self {
        Self { filter }
    }

    fn is_delimiter(c: char) -> bool {
        WHITESPACE_DELIMITERS.contains(c)
    }
}

impl Tokenizer for Whitespace {
    fn short_description(&self) -> String {
        "whitespace".to_string()
    }

    fn delimiters(&self) -> &str {
        WHITESPACE_DELIMITERS
    }

    fn tokenize(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if Self::is_delimiter(chars[pos]) {
                pos += 1;
            }
            let next_gap = chars[pos..]
                .iter()
                .position(|&c| Self::is_delimiter(c))
                .map_or(chars.len(), |offset| pos + offset);

            let term: String = chars[pos..next_gap].iter().collect();
            if !self.filter.is_filtered(&term) {
                tokens.push(term);
            }
            pos = next_gap;
        }

        tokens
    }
}
