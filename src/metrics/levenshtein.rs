//! Levenshtein edit distance

use tracing::trace;

use super::{chars, unit, AlignmentMatrix, StringMetric};
use crate::costs::{SubCostRange0To1, SubstitutionCost};

const LEVENSHTEIN_COST_MS: f64 = 1.8e-4;

/// Insertions and deletions cost 1; substitutions come from the cost table
const INDEL_COST: f64 = 1.0;

#[derive(Debug)]
pub struct Levenshtein {
    cost: Box<dyn SubstitutionCost>,
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self::new()
    }
}

impl Levenshtein {
    pub fn new() -> Self {
        Self::with_cost(Box::new(SubCostRange0To1))
    }

    pub fn with_cost(cost: Box<dyn SubstitutionCost>) -> Self {
        Self { cost }
    }

    /// Minimum edit cost turning `a` into `b`
    pub fn distance(&self, a: &[char], b: &[char]) -> f64 {
        let (n, m) = (a.len(), b.len());
        if n == 0 {
            return m as f64 * INDEL_COST;
        }
        if m == 0 {
            return n as f64 * INDEL_COST;
        }

        trace!("levenshtein matrix {}x{}", n + 1, m + 1);
        let mut d = AlignmentMatrix::new(n + 1, m + 1);
        for i in 0..=n {
            d[(i, 0)] = i as f64 * INDEL_COST;
        }
        for j in 0..=m {
            d[(0, j)] = j as f64 * INDEL_COST;
        }

        for i in 1..=n {
            for j in 1..=m {
                let cost = self.cost.cost(a, i - 1, b, j - 1);
                d[(i, j)] = (d[(i - 1, j)] + INDEL_COST)
                    .min(d[(i, j - 1)] + INDEL_COST)
                    .min(d[(i - 1, j - 1)] + cost);
            }
        }
        d[(n, m)]
    }
}

impl StringMetric for Levenshtein {
    fn short_description(&self) -> String {
        "Levenshtein".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Levenshtein edit distance, unit insert/delete, {} substitutions",
            self.cost.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = chars(a);
        let b = chars(b);
        let longest = a.len().max(b.len());
        if longest == 0 {
            return 1.0;
        }
        let worst = longest as f64 * self.cost.max_cost().max(INDEL_COST);
        unit(1.0 - self.distance(&a, &b) / worst)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.distance(&chars(a), &chars(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        la * lb * LEVENSHTEIN_COST_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitten_sitting() {
        let metric = Levenshtein::new();
        assert_eq!(metric.unnormalized_similarity("kitten", "sitting"), 3.0);
        assert!((metric.similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs() {
        let metric = Levenshtein::new();
        assert_eq!(metric.similarity("", ""), 1.0);
        assert_eq!(metric.unnormalized_similarity("", "abc"), 3.0);
        assert_eq!(metric.similarity("", "abc"), 0.0);
        assert_eq!(metric.unnormalized_similarity("ab", ""), 2.0);
    }

    #[test]
    fn test_unicode_counts_chars() {
        let metric = Levenshtein::new();
        assert_eq!(metric.unnormalized_similarity("café", "cafe"), 1.0);
    }

    #[test]
    fn test_estimated_cost_is_quadratic() {
        let metric = Levenshtein::new();
        let small = metric.estimated_cost("abcd", "abcd");
        let large = metric.estimated_cost("abcdabcd", "abcdabcd");
        assert!((large / small - 4.0).abs() < 1e-9);
    }
}
