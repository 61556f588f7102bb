//! Q-gram Tokenizer
//!
//! Emits every contiguous window of `length` characters. The extended form
//! pads both ends with `length - 1` copies of [`PADDING`] first so even very
//! short input yields tokens. A non-zero `skip` adds S-gram tokens: a
//! `length - 1` character prefix joined with the single character `skip`
//! positions after it.

use super::filter::{NoFilter, TermFilter};
use super::Tokenizer;

/// Padding character used by extended q-grams at both ends
pub const PADDING: char = '#';

#[derive(Debug)]
pub struct QGram {
    length: usize,
    extended: bool,
    skip: usize,
    filter: Box<dyn TermFilter>,
}

impl QGram {
    pub fn new(length: usize, extended: bool) -> Self {
        Self {
            length,
            extended,
            skip: 0,
            filter: Box::new(NoFilter),
        }
    }

    pub fn q2() -> Self {
        Self::new(2, false)
    }

    pub fn q3() -> Self {
        Self::new(3, false)
    }

    pub fn q2_extended() -> Self {
        Self::new(2, true)
    }

    pub fn q3_extended() -> Self {
        Self::new(3, true)
    }

    pub fn s2() -> Self {
        Self::new(2, false).with_skip(1)
    }

    pub fn s3() -> Self {
        Self::new(3, false).with_skip(1)
    }

    pub fn s2_extended() -> Self {
        Self::new(2, true).with_skip(1)
    }

    pub fn s3_extended() -> Self {
        Self::new(3, true).with_skip(1)
    }

    #[must_use]
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Box<dyn TermFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    fn padded(&self, word: &str) -> Vec<char> {
        if !self.extended {
            return word.chars().collect();
        }
        let pad = self.length.saturating_sub(1);
        std::iter::repeat(PADDING)
            .take(pad)
            .chain(word.chars())
            .chain(std::iter::repeat(PADDING).take(pad))
            .collect()
    }

    fn push(&self, tokens: &mut Vec<String>, term: String) {
        if !self.filter.is_filtered(&term) {
            tokens.push(term);
        }
    }
}

impl Tokenizer for QGram {
    fn short_description(&self) -> String {
        let kind = if self.skip > 0 { 's' } else { 'q' };
        let suffix = if self.extended { "-extended" } else { "" };
        format!("{}gram{}{}", kind, self.length, suffix)
    }

    fn delimiters(&self) -> &str {
        ""
    }

    fn tokenize(&self, word: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        if self.length == 0 {
            return tokens;
        }

        let chars = self.padded(word);
        if chars.len() < self.length {
            return tokens;
        }

        for window in chars.windows(self.length) {
            self.push(&mut tokens, window.iter().collect());
        }

        if self.skip > 0 {
            let prefix_len = self.length - 1;
            let mut i = 0;
            while i + prefix_len + self.skip < chars.len() {
                let mut term: String = chars[i..i + prefix_len].iter().collect();
                term.push(chars[i + prefix_len + self.skip]);
                self.push(&mut tokens, term);
                i += 1;
            }
        }

        tokens
    }
}
