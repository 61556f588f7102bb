//! Smith-Waterman local alignment
//!
//! - `SmithWaterman`: linear gap cost
//! - `SmithWatermanGotoh`: affine gap cost, gap origins searched over the
//!   whole row and column
//! - `SmithWatermanGotohWindowedAffine`: affine gap cost, gap origins searched
//!   at most `window_size` cells back
//!
//! Every cell is floored at 0 and the score is the best cell of the matrix.
//! Similarity divides by the best achievable score for the shorter string.

use tracing::trace;

use super::{chars, unit, AlignmentMatrix, StringMetric};
use crate::costs::{
    AffineGap, AffineGapCost, SubCostRange1ToMinus2, SubCostRange5ToMinus3, SubstitutionCost,
};

const SMITH_WATERMAN_COST_MS: f64 = 1.61e-4;
const GOTOH_COST_MS: f64 = 4.5e-5;

/// Default linear gap cost of `SmithWaterman`
pub const DEFAULT_GAP_COST: f64 = 0.5;

/// Default look-back of `SmithWatermanGotohWindowedAffine`
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Score of a local alignment normalized by `min(la, lb) * best_step`
fn local_similarity(score: f64, la: usize, lb: usize, best_step: f64) -> f64 {
    if la == 0 && lb == 0 {
        return 1.0;
    }
    if la == 0 || lb == 0 {
        return 0.0;
    }
    let max_value = la.min(lb) as f64 * best_step;
    if max_value == 0.0 {
        return 1.0;
    }
    unit(score / max_value)
}

// ============ Smith-Waterman ============

#[derive(Debug)]
pub struct SmithWaterman {
    cost: Box<dyn SubstitutionCost>,
    gap_cost: f64,
}

impl Default for SmithWaterman {
    fn default() -> Self {
        Self::new()
    }
}

impl SmithWaterman {
    pub fn new() -> Self {
        Self::with_costs(Box::new(SubCostRange1ToMinus2), DEFAULT_GAP_COST)
    }

    pub fn with_gap_cost(gap_cost: f64) -> Self {
        Self::with_costs(Box::new(SubCostRange1ToMinus2), gap_cost)
    }

    pub fn with_costs(cost: Box<dyn SubstitutionCost>, gap_cost: f64) -> Self {
        Self { cost, gap_cost }
    }

    pub fn gap_cost(&self) -> f64 {
        self.gap_cost
    }

    /// Best local alignment score, 0.0 when either side is empty
    pub fn score(&self, a: &[char], b: &[char]) -> f64 {
        let (n, m) = (a.len(), b.len());
        if n == 0 || m == 0 {
            return 0.0;
        }

        trace!("smith-waterman matrix {}x{}", n, m);
        let mut d = AlignmentMatrix::new(n, m);
        let mut best = 0.0f64;
        for i in 0..n {
            for j in 0..m {
                let cost = self.cost.cost(a, i, b, j);
                let diagonal = if i > 0 && j > 0 { d[(i - 1, j - 1)] } else { 0.0 };
                let mut cell = (diagonal + cost).max(0.0);
                if i > 0 {
                    cell = cell.max(d[(i - 1, j)] - self.gap_cost);
                }
                if j > 0 {
                    cell = cell.max(d[(i, j - 1)] - self.gap_cost);
                }
                d[(i, j)] = cell;
                best = best.max(cell);
            }
        }
        best
    }
}

impl StringMetric for SmithWaterman {
    fn short_description(&self) -> String {
        "SmithWaterman".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Smith-Waterman local alignment, gap cost {}, {} substitutions",
            self.gap_cost,
            self.cost.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = chars(a);
        let b = chars(b);
        let best_step = self.cost.max_cost().max(self.gap_cost);
        local_similarity(self.score(&a, &b), a.len(), b.len(), best_step)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.score(&chars(a), &chars(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        la * lb * SMITH_WATERMAN_COST_MS
    }
}

// ============ Gotoh (affine gaps) ============

/// Local alignment with affine gaps. `window` bounds how many cells back a
/// gap may start; `None` searches the whole row and column.
fn gotoh_score(
    a: &[char],
    b: &[char],
    cost: &dyn SubstitutionCost,
    gap: &dyn AffineGapCost,
    window: Option<usize>,
) -> f64 {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return 0.0;
    }

    trace!("gotoh matrix {}x{}, window {:?}", n, m, window);
    let mut d = AlignmentMatrix::new(n, m);
    let mut best = 0.0f64;
    for i in 0..n {
        for j in 0..m {
            let diagonal = if i > 0 && j > 0 { d[(i - 1, j - 1)] } else { 0.0 };
            let mut cell = (diagonal + cost.cost(a, i, b, j)).max(0.0);

            let reach_i = window.map_or(i, |w| w.min(i));
            for k in 1..=reach_i {
                cell = cell.max(d[(i - k, j)] - gap.cost(a, i - k, i));
            }
            let reach_j = window.map_or(j, |w| w.min(j));
            for k in 1..=reach_j {
                cell = cell.max(d[(i, j - k)] - gap.cost(b, j - k, j));
            }

            d[(i, j)] = cell;
            best = best.max(cell);
        }
    }
    best
}

fn gotoh_best_step(cost: &dyn SubstitutionCost, gap: &dyn AffineGapCost) -> f64 {
    cost.max_cost().max(gap.max_cost())
}

/// Smith-Waterman-Gotoh with an unbounded gap window
#[derive(Debug)]
pub struct SmithWatermanGotoh {
    cost: Box<dyn SubstitutionCost>,
    gap: Box<dyn AffineGapCost>,
}

impl Default for SmithWatermanGotoh {
    fn default() -> Self {
        Self::new()
    }
}

impl SmithWatermanGotoh {
    /// Phonetic substitutions, gap open 5 / extend 1
    pub fn new() -> Self {
        Self::with_costs(
            Box::new(SubCostRange5ToMinus3),
            Box::new(AffineGap::range_5_to_0_multiplier_1()),
        )
    }

    pub fn with_costs(cost: Box<dyn SubstitutionCost>, gap: Box<dyn AffineGapCost>) -> Self {
        Self { cost, gap }
    }

    pub fn score(&self, a: &[char], b: &[char]) -> f64 {
        gotoh_score(a, b, self.cost.as_ref(), self.gap.as_ref(), None)
    }
}

impl StringMetric for SmithWatermanGotoh {
    fn short_description(&self) -> String {
        "SmithWatermanGotoh".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Smith-Waterman-Gotoh local alignment, {} gaps, {} substitutions",
            self.gap.short_description(),
            self.cost.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = chars(a);
        let b = chars(b);
        let best_step = gotoh_best_step(self.cost.as_ref(), self.gap.as_ref());
        local_similarity(self.score(&a, &b), a.len(), b.len(), best_step)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.score(&chars(a), &chars(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        la * lb * (la + lb) * GOTOH_COST_MS
    }
}

/// Smith-Waterman-Gotoh searching gap origins at most `window_size` back
#[derive(Debug)]
pub struct SmithWatermanGotohWindowedAffine {
    cost: Box<dyn SubstitutionCost>,
    gap: Box<dyn AffineGapCost>,
    window_size: usize,
}

impl Default for SmithWatermanGotohWindowedAffine {
    fn default() -> Self {
        Self::new()
    }
}

impl SmithWatermanGotohWindowedAffine {
    pub fn new() -> Self {
        Self::with_window_size(DEFAULT_WINDOW_SIZE)
    }

    pub fn with_window_size(window_size: usize) -> Self {
        Self::with_costs(
            Box::new(SubCostRange5ToMinus3),
            Box::new(AffineGap::range_5_to_0_multiplier_1()),
            window_size,
        )
    }

    pub fn with_costs(
        cost: Box<dyn SubstitutionCost>,
        gap: Box<dyn AffineGapCost>,
        window_size: usize,
    ) -> Self {
        Self {
            cost,
            gap,
            window_size,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn score(&self, a: &[char], b: &[char]) -> f64 {
        gotoh_score(
            a,
            b,
            self.cost.as_ref(),
            self.gap.as_ref(),
            Some(self.window_size),
        )
    }
}

impl StringMetric for SmithWatermanGotohWindowedAffine {
    fn short_description(&self) -> String {
        "SmithWatermanGotohWindowedAffine".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Smith-Waterman-Gotoh local alignment, window {}, {} gaps, {} substitutions",
            self.window_size,
            self.gap.short_description(),
            self.cost.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = chars(a);
        let b = chars(b);
        let best_step = gotoh_best_step(self.cost.as_ref(), self.gap.as_ref());
        local_similarity(self.score(&a, &b), a.len(), b.len(), best_step)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.score(&chars(a), &chars(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        let reach = (self.window_size as f64).min(la.max(lb));
        la * lb * 2.0 * reach * GOTOH_COST_MS
    }
}
