//! Length-only metrics

use super::{unit, StringMetric};

/// Combined length beyond which two strings count as fully similar
const CHAPMAN_LENGTH_LIMIT: f64 = 500.0;

/// `1 - ((500 - (la + lb)) / 500)^4`, saturating at 1.0 past 500 characters.
///
/// Scores length only, so short identical strings score low.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapmanMeanLength;

impl ChapmanMeanLength {
    pub fn new() -> Self {
        Self
    }
}

impl StringMetric for ChapmanMeanLength {
    fn short_description(&self) -> String {
        "ChapmanMeanLength".to_string()
    }

    fn long_description(&self) -> String {
        "Mean-length similarity, saturating at a combined length of 500".to_string()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let combined = (a.chars().count() + b.chars().count()) as f64;
        if combined > CHAPMAN_LENGTH_LIMIT {
            return 1.0;
        }
        let remaining = (CHAPMAN_LENGTH_LIMIT - combined) / CHAPMAN_LENGTH_LIMIT;
        unit(1.0 - remaining.powi(4))
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, _a: &str, _b: &str) -> f64 {
        0.0
    }
}

/// Shorter length over longer length
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapmanLengthDeviation;

impl ChapmanLengthDeviation {
    pub fn new() -> Self {
        Self
    }
}

impl StringMetric for ChapmanLengthDeviation {
    fn short_description(&self) -> String {
        "ChapmanLengthDeviation".to_string()
    }

    fn long_description(&self) -> String {
        "Ratio of the shorter to the longer string length".to_string()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count();
        let lb = b.chars().count();
        let longer = la.max(lb);
        if longer == 0 {
            return 1.0;
        }
        la.min(lb) as f64 / longer as f64
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, _a: &str, _b: &str) -> f64 {
        0.0
    }
}
