//! Needleman-Wunsch global alignment distance
//!
//! Same recurrence as Levenshtein but with an independent linear gap cost.

use tracing::trace;

use super::{chars, unit, AlignmentMatrix, StringMetric};
use crate::costs::{SubCostRange0To1, SubstitutionCost};

const NEEDLEMAN_WUNSCH_COST_MS: f64 = 1.842e-4;

/// Default cost of a single inserted or deleted character
pub const DEFAULT_GAP_COST: f64 = 2.0;

#[derive(Debug)]
pub struct NeedlemanWunsch {
    cost: Box<dyn SubstitutionCost>,
    gap_cost: f64,
}

impl Default for NeedlemanWunsch {
    fn default() -> Self {
        Self::new()
    }
}

impl NeedlemanWunsch {
    pub fn new() -> Self {
        Self::with_costs(Box::new(SubCostRange0To1), DEFAULT_GAP_COST)
    }

    pub fn with_gap_cost(gap_cost: f64) -> Self {
        Self::with_costs(Box::new(SubCostRange0To1), gap_cost)
    }

    pub fn with_costs(cost: Box<dyn SubstitutionCost>, gap_cost: f64) -> Self {
        Self { cost, gap_cost }
    }

    pub fn gap_cost(&self) -> f64 {
        self.gap_cost
    }

    pub fn distance(&self, a: &[char], b: &[char]) -> f64 {
        let (n, m) = (a.len(), b.len());
        if n == 0 {
            return m as f64 * self.gap_cost;
        }
        if m == 0 {
            return n as f64 * self.gap_cost;
        }

        trace!("needleman-wunsch matrix {}x{}", n + 1, m + 1);
        let mut d = AlignmentMatrix::new(n + 1, m + 1);
        for i in 0..=n {
            d[(i, 0)] = i as f64 * self.gap_cost;
        }
        for j in 0..=m {
            d[(0, j)] = j as f64 * self.gap_cost;
        }

        for i in 1..=n {
            for j in 1..=m {
                let cost = self.cost.cost(a, i - 1, b, j - 1);
                d[(i, j)] = (d[(i - 1, j)] + self.gap_cost)
                    .min(d[(i, j - 1)] + self.gap_cost)
                    .min(d[(i - 1, j - 1)] + cost);
            }
        }
        d[(n, m)]
    }
}

impl StringMetric for NeedlemanWunsch {
    fn short_description(&self) -> String {
        "NeedlemanWunsch".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Needleman-Wunsch global alignment, gap cost {}, {} substitutions",
            self.gap_cost,
            self.cost.short_description()
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = chars(a);
        let b = chars(b);
        let mut distance = self.distance(&a, &b);

        let longest = a.len().max(b.len()) as f64;
        let mut max_value = longest * self.cost.max_cost().max(self.gap_cost);
        let min_value = longest * self.cost.min_cost().min(self.gap_cost);
        // Shift negative scoring tables so the range starts at zero
        if min_value < 0.0 {
            max_value -= min_value;
            distance -= min_value;
        }
        if max_value == 0.0 {
            return 1.0;
        }
        unit(1.0 - distance / max_value)
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.distance(&chars(a), &chars(b))
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        la * lb * NEEDLEMAN_WUNSCH_COST_MS
    }
}
