//! String metrics
//!
//! Every algorithm implements [`StringMetric`]. Metrics are immutable once
//! constructed; tokenizers and cost tables are injected through constructors.

pub mod jaro;
pub mod length;
pub mod levenshtein;
pub mod matrix;
pub mod monge_elkan;
pub mod needleman_wunsch;
pub mod set_based;
pub mod smith_waterman;
pub mod vector;

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{SimError, SimResult};

pub use jaro::{Jaro, JaroWinkler};
pub use length::{ChapmanLengthDeviation, ChapmanMeanLength};
pub use levenshtein::Levenshtein;
pub use matrix::AlignmentMatrix;
pub use monge_elkan::MongeElkan;
pub use needleman_wunsch::NeedlemanWunsch;
pub use set_based::{
    CosineSimilarity, DiceSimilarity, JaccardSimilarity, MatchingCoefficient, OverlapCoefficient,
};
pub use smith_waterman::{SmithWaterman, SmithWatermanGotoh, SmithWatermanGotohWindowedAffine};
pub use vector::{BlockDistance, EuclideanDistance, QGramsDistance};

/// Common contract of all similarity metrics.
pub trait StringMetric: fmt::Debug + Send + Sync {
    /// Short name, e.g. `"Levenshtein"`
    fn short_description(&self) -> String;

    /// One-line description of the algorithm and its configuration
    fn long_description(&self) -> String;

    /// Normalized similarity in `[0, 1]`; 1.0 means identical under this metric
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Raw algorithm output before normalization (a distance for edit metrics)
    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64;

    /// Predicted running time of [`similarity`](Self::similarity) in milliseconds
    fn estimated_cost(&self, a: &str, b: &str) -> f64;

    /// Explanations are not supported by any metric
    fn explain(&self, _a: &str, _b: &str) -> SimResult<String> {
        Err(SimError::not_implemented(&format!(
            "explain is not supported by {}",
            self.short_description()
        )))
    }

    /// Null-safe similarity: 0.0 when either input is absent
    fn similarity_opt(&self, a: Option<&str>, b: Option<&str>) -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => self.similarity(a, b),
            _ => 0.0,
        }
    }

    /// Null-safe raw similarity: 0.0 when either input is absent
    fn unnormalized_similarity_opt(&self, a: Option<&str>, b: Option<&str>) -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => self.unnormalized_similarity(a, b),
            _ => 0.0,
        }
    }

    /// Measured wall time of one similarity call
    fn similarity_timing(&self, a: &str, b: &str) -> Duration {
        let start = Instant::now();
        std::hint::black_box(self.similarity(a, b));
        start.elapsed()
    }

    /// Similarity of every element of `set` against `comparator`
    fn batch_compare_set(
        &self,
        set: Option<&[&str]>,
        comparator: Option<&str>,
    ) -> SimResult<Vec<f64>> {
        let set = set.ok_or_else(|| SimError::missing("set"))?;
        let comparator = comparator.ok_or_else(|| SimError::missing("comparator"))?;
        debug!(
            "{}: comparing {} strings against one comparator",
            self.short_description(),
            set.len()
        );
        Ok(set
            .iter()
            .map(|s| self.similarity(s, comparator))
            .collect())
    }

    /// Pairwise similarity; the result has the length of the shorter input
    fn batch_compare_sets(
        &self,
        first: Option<&[&str]>,
        second: Option<&[&str]>,
    ) -> SimResult<Vec<f64>> {
        let first = first.ok_or_else(|| SimError::missing("first"))?;
        let second = second.ok_or_else(|| SimError::missing("second"))?;
        if first.len() != second.len() {
            debug!(
                "{}: truncating pairwise batch to {} of {}/{} entries",
                self.short_description(),
                first.len().min(second.len()),
                first.len(),
                second.len()
            );
        }
        Ok(first
            .iter()
            .zip(second)
            .map(|(a, b)| self.similarity(a, b))
            .collect())
    }
}

/// Clamp a ratio into `[0, 1]`, mapping NaN to 0
#[inline]
pub(crate) fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[inline]
pub(crate) fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_clamps() {
        assert_eq!(unit(-0.5), 0.0);
        assert_eq!(unit(1.5), 1.0);
        assert_eq!(unit(f64::NAN), 0.0);
        assert_eq!(unit(0.25), 0.25);
    }

    #[test]
    fn test_explain_is_not_implemented() {
        let err = Levenshtein::new().explain("a", "b").unwrap_err();
        assert!(matches!(err, SimError::NotImplemented(_)));
    }

    #[test]
    fn test_batch_compare_set() {
        let metric = Levenshtein::new();
        let set: &[&str] = &["abc", "abd", "xyz"];
        let scores = metric.batch_compare_set(Some(set), Some("abc")).unwrap();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 1.0);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_batch_compare_set_rejects_absent_input() {
        let metric = Levenshtein::new();
        let set = ["abc"];
        assert!(matches!(
            metric.batch_compare_set(None, Some("abc")),
            Err(SimError::InvalidArgument(_))
        ));
        assert!(matches!(
            metric.batch_compare_set(Some(&set[..]), None),
            Err(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_batch_compare_sets_truncates() {
        let metric = Levenshtein::new();
        let first = ["a", "b", "c"];
        let second = ["a", "x"];
        let scores = metric
            .batch_compare_sets(Some(&first[..]), Some(&second[..]))
            .unwrap();
        assert_eq!(scores, vec![1.0, 0.0]);
        assert!(metric.batch_compare_sets(Some(&first[..]), None).is_err());
    }

    #[test]
    fn test_optional_inputs() {
        let metric = Levenshtein::new();
        assert_eq!(metric.similarity_opt(None, Some("a")), 0.0);
        assert_eq!(metric.similarity_opt(Some("a"), None), 0.0);
        assert_eq!(metric.similarity_opt(Some("a"), Some("a")), 1.0);
        assert_eq!(metric.unnormalized_similarity_opt(None, None), 0.0);
    }
}
