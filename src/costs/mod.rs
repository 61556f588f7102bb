//! Cost functions
//!
//! Two independent strategy families used by the alignment metrics:
//! substitution costs score a character pair, affine gap costs score a run of
//! consecutive insertions or deletions.

pub mod gap;
pub mod substitution;

use std::fmt;

pub use gap::AffineGap;
pub use substitution::{SubCostRange0To1, SubCostRange1ToMinus2, SubCostRange5ToMinus3};

/// Score for aligning `a[index_a]` with `b[index_b]`.
///
/// Implementations return [`min_cost`](Self::min_cost) for any index outside
/// its string instead of panicking.
pub trait SubstitutionCost: fmt::Debug + Send + Sync {
    fn short_description(&self) -> &'static str;

    fn cost(&self, a: &[char], index_a: usize, b: &[char], index_b: usize) -> f64;

    fn max_cost(&self) -> f64;

    fn min_cost(&self) -> f64;
}

/// Score for a gap spanning `text[start..end]`.
pub trait AffineGapCost: fmt::Debug + Send + Sync {
    fn short_description(&self) -> String;

    /// 0 when `start >= end`
    fn cost(&self, text: &[char], start: usize, end: usize) -> f64;

    /// Cost of opening a one-character gap
    fn max_cost(&self) -> f64;

    fn min_cost(&self) -> f64;
}
