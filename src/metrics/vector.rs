//! Vector-space distance metrics
//!
//! Term-frequency distances normalized by the total token count:
//! - Block (L1) Distance
//! - Euclidean (L2) Distance
//! - Q-Grams Distance (block distance over padded trigrams by default)

use super::{unit, StringMetric};
use crate::tokenizers::{term_frequencies, QGram, TokenSetUtilities, Tokenizer, Whitespace};

const BLOCK_COST_MS: f64 = 6.4457998e-5;
const EUCLIDEAN_COST_MS: f64 = 7.4457994e-5;
const QGRAMS_COST_MS: f64 = 1.3422e-4;

/// Per-term absolute count differences over the merged vocabulary
fn count_differences(first: &[String], second: &[String]) -> Vec<f64> {
    let first_freq = term_frequencies(first);
    let second_freq = term_frequencies(second);
    let mut utilities = TokenSetUtilities::new();
    let vocabulary = utilities.create_merged_set(first, second);

    vocabulary
        .iter()
        .map(|term| {
            let x = first_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
            let y = second_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
            (x - y).abs()
        })
        .collect()
}

fn l1_distance(first: &[String], second: &[String]) -> f64 {
    count_differences(first, second).iter().sum()
}

/// (|a| + |b| - d) / (|a| + |b|), 1.0 when both are empty
fn l1_similarity(first: &[String], second: &[String]) -> f64 {
    let total = (first.len() + second.len()) as f64;
    if total == 0.0 {
        return 1.0;
    }
    unit((total - l1_distance(first, second)) / total)
}

fn token_cost(tokenizer: &dyn Tokenizer, a: &str, b: &str, per_token: f64) -> f64 {
    let total = (tokenizer.tokenize(a).len() + tokenizer.tokenize(b).len()) as f64;
    total * total * per_token
}

// ============ Block Distance ============

#[derive(Debug)]
pub struct BlockDistance {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for BlockDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDistance {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl StringMetric for BlockDistance {
    fn short_description(&self) -> String {
        "BlockDistance".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "L1 block distance over {} term frequencies",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        l1_similarity(&self.tokenizer.tokenize(a), &self.tokenizer.tokenize(b))
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        l1_distance(&self.tokenizer.tokenize(a), &self.tokenizer.tokenize(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, BLOCK_COST_MS)
    }
}

// ============ Euclidean Distance ============

#[derive(Debug)]
pub struct EuclideanDistance {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for EuclideanDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl EuclideanDistance {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    fn distance(first: &[String], second: &[String]) -> f64 {
        count_differences(first, second)
            .iter()
            .map(|d| d * d)
            .sum::<f64>()
            .sqrt()
    }
}

impl StringMetric for EuclideanDistance {
    fn short_description(&self) -> String {
        "EuclideanDistance".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "L2 distance over {} term frequencies",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let first = self.tokenizer.tokenize(a);
        let second = self.tokenizer.tokenize(b);
        let total = ((first.len() + second.len()) as f64).sqrt();
        if total == 0.0 {
            return 1.0;
        }
        unit((total - Self::distance(&first, &second)) / total)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        Self::distance(&self.tokenizer.tokenize(a), &self.tokenizer.tokenize(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, EUCLIDEAN_COST_MS)
    }
}

// ============ Q-Grams Distance ============

#[derive(Debug)]
pub struct QGramsDistance {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for QGramsDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl QGramsDistance {
    /// Padded trigrams
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(QGram::q3_extended()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl StringMetric for QGramsDistance {
    fn short_description(&self) -> String {
        "QGramsDistance".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Block distance over {} tokens",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        l1_similarity(&self.tokenizer.tokenize(a), &self.tokenizer.tokenize(b))
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        l1_distance(&self.tokenizer.tokenize(a), &self.tokenizer.tokenize(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, QGRAMS_COST_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_distance() {
        let metric = BlockDistance::new();
        let (a, b) = ("the cat sat", "the dog sat");
        // the:0 cat:1 dog:1 sat:0
        assert_eq!(metric.unnormalized_similarity(a, b), 2.0);
        assert!((metric.similarity(a, b) - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_block_distance_counts_multiplicity() {
        let metric = BlockDistance::new();
        assert_eq!(metric.unnormalized_similarity("a a a", "a"), 2.0);
        assert_eq!(metric.similarity("a b", "c d"), 0.0);
    }

    #[test]
    fn test_euclidean_distance() {
        let metric = EuclideanDistance::new();
        let (a, b) = ("the cat sat", "the dog sat");
        assert!((metric.unnormalized_similarity(a, b) - 2f64.sqrt()).abs() < 1e-12);
        let expected = (6f64.sqrt() - 2f64.sqrt()) / 6f64.sqrt();
        assert!((metric.similarity(a, b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_is_floored_at_zero() {
        let metric = EuclideanDistance::new();
        assert_eq!(metric.similarity("x x x x", "y"), 0.0);
    }

    #[test]
    fn test_qgrams_distance() {
        let metric = QGramsDistance::new();
        assert_eq!(metric.similarity("abc", "abc"), 1.0);
        // ##a #ab ab# b## vs ##a #ac ac# c##
        assert_eq!(metric.unnormalized_similarity("ab", "ac"), 6.0);
        assert!((metric.similarity("ab", "ac") - 2.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(BlockDistance::new().similarity("", ""), 1.0);
        assert_eq!(EuclideanDistance::new().similarity("", ""), 1.0);
        assert_eq!(QGramsDistance::new().similarity("", ""), 1.0);
    }
}
