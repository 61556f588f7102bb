//! Set-based similarity metrics
//!
//! Token-set measures built on the inclusion-exclusion counts of
//! [`TokenSetUtilities`]:
//! - Cosine Similarity
//! - Dice Similarity
//! - Jaccard Similarity
//! - Overlap Coefficient
//! - Matching Coefficient (multiset: counts every occurrence in the first string)

use std::collections::HashSet;

use super::{unit, StringMetric};
use crate::tokenizers::{TokenCounts, TokenSetUtilities, Tokenizer, Whitespace};

const COSINE_COST_MS: f64 = 3.8337142e-5;
const DICE_COST_MS: f64 = 3.4457993e-5;
const JACCARD_COST_MS: f64 = 1.4457995e-5;
const OVERLAP_COST_MS: f64 = 1.4457995e-5;
const MATCHING_COST_MS: f64 = 2.0e-4;

/// Unique-term counts of both strings after a set merge
fn set_counts(tokenizer: &dyn Tokenizer, a: &str, b: &str) -> TokenCounts {
    let first = tokenizer.tokenize(a);
    let second = tokenizer.tokenize(b);
    let mut utilities = TokenSetUtilities::new();
    utilities.create_merged_set(&first, &second);
    utilities.counts()
}

/// Quadratic cost proxy in the total token count
fn token_cost(tokenizer: &dyn Tokenizer, a: &str, b: &str, per_token: f64) -> f64 {
    let total = (tokenizer.tokenize(a).len() + tokenizer.tokenize(b).len()) as f64;
    total * total * per_token
}

/// Score for inputs where at least one side has no terms
fn empty_score(counts: &TokenCounts) -> f64 {
    if counts.first == 0 && counts.second == 0 {
        1.0
    } else {
        0.0
    }
}

// ============ Cosine Similarity ============

/// common / (√|A| · √|B|)
#[derive(Debug)]
pub struct CosineSimilarity {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for CosineSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl CosineSimilarity {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl StringMetric for CosineSimilarity {
    fn short_description(&self) -> String {
        "CosineSimilarity".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Cosine similarity over {} token sets",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let counts = set_counts(self.tokenizer.as_ref(), a, b);
        if counts.first == 0 || counts.second == 0 {
            return empty_score(&counts);
        }
        let denominator = (counts.first as f64).sqrt() * (counts.second as f64).sqrt();
        unit(counts.common_terms() as f64 / denominator)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, COSINE_COST_MS)
    }
}

// ============ Dice Similarity ============

/// 2 · common / (|A| + |B|)
#[derive(Debug)]
pub struct DiceSimilarity {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for DiceSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSimilarity {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl StringMetric for DiceSimilarity {
    fn short_description(&self) -> String {
        "DiceSimilarity".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Dice coefficient over {} token sets",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let counts = set_counts(self.tokenizer.as_ref(), a, b);
        let total = counts.first + counts.second;
        if total == 0 {
            return 1.0;
        }
        unit(2.0 * counts.common_terms() as f64 / total as f64)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, DICE_COST_MS)
    }
}

// ============ Jaccard Similarity ============

/// common / |A ∪ B|
#[derive(Debug)]
pub struct JaccardSimilarity {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for JaccardSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl JaccardSimilarity {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl StringMetric for JaccardSimilarity {
    fn short_description(&self) -> String {
        "JaccardSimilarity".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Jaccard similarity over {} token sets",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let counts = set_counts(self.tokenizer.as_ref(), a, b);
        if counts.merged == 0 {
            return 1.0;
        }
        unit(counts.common_terms() as f64 / counts.merged as f64)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, JACCARD_COST_MS)
    }
}

// ============ Overlap Coefficient ============

/// common / min(|A|, |B|)
#[derive(Debug)]
pub struct OverlapCoefficient {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for OverlapCoefficient {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapCoefficient {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }
}

impl StringMetric for OverlapCoefficient {
    fn short_description(&self) -> String {
        "OverlapCoefficient".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Overlap coefficient over {} token sets",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let counts = set_counts(self.tokenizer.as_ref(), a, b);
        let smaller = counts.first.min(counts.second);
        if smaller == 0 {
            return empty_score(&counts);
        }
        unit(counts.common_terms() as f64 / smaller as f64)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, OVERLAP_COST_MS)
    }
}

// ============ Matching Coefficient ============

/// Tokens of the first string that also occur in the second, over the longer
/// token count
#[derive(Debug)]
pub struct MatchingCoefficient {
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for MatchingCoefficient {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingCoefficient {
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(Whitespace::new()))
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// (matches, |a|, |b|)
    fn matches(&self, a: &str, b: &str) -> (usize, usize, usize) {
        let first = self.tokenizer.tokenize(a);
        let second = self.tokenizer.tokenize(b);
        let mut utilities = TokenSetUtilities::new();
        utilities.create_merged_list(&first, &second);

        let lookup: HashSet<&str> = second.iter().map(String::as_str).collect();
        let found = first.iter().filter(|t| lookup.contains(t.as_str())).count();
        (
            found,
            utilities.first_token_count(),
            utilities.second_token_count(),
        )
    }
}

impl StringMetric for MatchingCoefficient {
    fn short_description(&self) -> String {
        "MatchingCoefficient".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Matching coefficient over {} tokens",
            self.tokenizer.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let (found, first, second) = self.matches(a, b);
        let longer = first.max(second);
        if longer == 0 {
            return 1.0;
        }
        unit(found as f64 / longer as f64)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.matches(a, b).0 as f64
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        token_cost(self.tokenizer.as_ref(), a, b, MATCHING_COST_MS)
    }
}
