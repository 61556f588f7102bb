//! Affine gap costs

use super::AffineGapCost;

/// `open + (length - 1) * extend` for a gap of `length` characters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineGap {
    open: f64,
    extend: f64,
}

impl Default for AffineGap {
    fn default() -> Self {
        Self::range_5_to_0_multiplier_1()
    }
}

impl AffineGap {
    pub fn new(open: f64, extend: f64) -> Self {
        Self { open, extend }
    }

    /// Open 1, each further character 1/3
    pub fn range_1_to_0_multiplier_1_over_3() -> Self {
        Self::new(1.0, 1.0 / 3.0)
    }

    /// Open 5, each further character 1
    pub fn range_5_to_0_multiplier_1() -> Self {
        Self::new(5.0, 1.0)
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn extend(&self) -> f64 {
        self.extend
    }
}

impl AffineGapCost for AffineGap {
    fn short_description(&self) -> String {
        format!("AffineGap(open={}, extend={:.3})", self.open, self.extend)
    }

    fn cost(&self, text: &[char], start: usize, end: usize) -> f64 {
        if start >= end {
            return 0.0;
        }
        if end > text.len() {
            return self.min_cost();
        }
        self.open + (end - 1 - start) as f64 * self.extend
    }

    fn max_cost(&self) -> f64 {
        self.open
    }

    fn min_cost(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_gap() {
        let text: Vec<char> = "abcdef".chars().collect();
        let gap = AffineGap::range_5_to_0_multiplier_1();
        assert_eq!(gap.cost(&text, 3, 3), 0.0);
        assert_eq!(gap.cost(&text, 4, 2), 0.0);
    }

    #[test]
    fn test_affine_growth() {
        let text: Vec<char> = "abcdef".chars().collect();
        let gap = AffineGap::range_5_to_0_multiplier_1();
        assert_eq!(gap.cost(&text, 0, 1), 5.0);
        assert_eq!(gap.cost(&text, 0, 3), 7.0);

        let gap = AffineGap::range_1_to_0_multiplier_1_over_3();
        assert_eq!(gap.cost(&text, 2, 3), 1.0);
        assert!((gap.cost(&text, 0, 4) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gap_past_end_returns_min_cost() {
        let text: Vec<char> = "ab".chars().collect();
        assert_eq!(AffineGap::default().cost(&text, 0, 5), 0.0);
    }

    #[test]
    fn test_bounds() {
        let gap = AffineGap::range_1_to_0_multiplier_1_over_3();
        assert_eq!(gap.max_cost(), 1.0);
        assert_eq!(gap.min_cost(), 0.0);
    }
}
