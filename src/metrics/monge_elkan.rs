//! Monge-Elkan token alignment
//!
//! Each token of the first string is paired with its best match among the
//! tokens of the second string under an inner metric; the result is the mean
//! of those best scores. The measure is not symmetric.

use super::{unit, SmithWatermanGotoh, StringMetric};
use crate::tokenizers::{Tokenizer, Whitespace};

#[derive(Debug)]
pub struct MongeElkan {
    tokenizer: Box<dyn Tokenizer>,
    inner: Box<dyn StringMetric>,
}

impl Default for MongeElkan {
    fn default() -> Self {
        Self::new()
    }
}

impl MongeElkan {
    /// Whitespace tokens compared with Smith-Waterman-Gotoh
    pub fn new() -> Self {
        Self::with_metric(Box::new(SmithWatermanGotoh::new()))
    }

    pub fn with_metric(inner: Box<dyn StringMetric>) -> Self {
        Self::with_tokenizer_and_metric(Box::new(Whitespace::new()), inner)
    }

    pub fn with_tokenizer_and_metric(
        tokenizer: Box<dyn Tokenizer>,
        inner: Box<dyn StringMetric>,
    ) -> Self {
        Self { tokenizer, inner }
    }

    pub fn inner(&self) -> &dyn StringMetric {
        self.inner.as_ref()
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }
}

impl StringMetric for MongeElkan {
    fn short_description(&self) -> String {
        "MongeElkan".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Monge-Elkan mean best-token similarity over {} tokens using {}",
            self.tokenizer.short_description(),
            self.inner.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let first = self.tokenizer.tokenize(a);
        let second = self.tokenizer.tokenize(b);
        if first.is_empty() {
            return if second.is_empty() { 1.0 } else { 0.0 };
        }

        let total: f64 = first
            .iter()
            .map(|t1| {
                second
                    .iter()
                    .map(|t2| self.inner.similarity(t1, t2))
                    .fold(0.0, f64::max)
            })
            .sum();
        unit(total / first.len() as f64)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let first = self.tokenizer.tokenize(a);
        let second = self.tokenizer.tokenize(b);
        first
            .iter()
            .flat_map(|t1| second.iter().map(move |t2| (t1, t2)))
            .map(|(t1, t2)| self.inner.estimated_cost(t1, t2))
            .sum()
    }
}
