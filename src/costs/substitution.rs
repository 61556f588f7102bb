//! Substitution cost tables

use super::SubstitutionCost;

/// Both characters, or `None` when either index is out of range
#[inline]
fn pair(a: &[char], index_a: usize, b: &[char], index_b: usize) -> Option<(char, char)> {
    Some((*a.get(index_a)?, *b.get(index_b)?))
}

/// Edit-distance table: 0 for identical characters, 1 otherwise
///
/// The range name reads like a score (match 1, mismatch 0) but the values are
/// edit costs, so Levenshtein and Needleman-Wunsch minimise over them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubCostRange0To1;

impl SubstitutionCost for SubCostRange0To1 {
    fn short_description(&self) -> &'static str {
        "SubCostRange0To1"
    }

    fn cost(&self, a: &[char], index_a: usize, b: &[char], index_b: usize) -> f64 {
        match pair(a, index_a, b, index_b) {
            Some((x, y)) if x != y => 1.0,
            Some(_) => 0.0,
            None => self.min_cost(),
        }
    }

    fn max_cost(&self) -> f64 {
        1.0
    }

    fn min_cost(&self) -> f64 {
        0.0
    }
}

/// Bipolar scoring table: 1 on match, -2 on mismatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubCostRange1ToMinus2;

impl SubstitutionCost for SubCostRange1ToMinus2 {
    fn short_description(&self) -> &'static str {
        "SubCostRange1ToMinus2"
    }

    fn cost(&self, a: &[char], index_a: usize, b: &[char], index_b: usize) -> f64 {
        match pair(a, index_a, b, index_b) {
            Some((x, y)) if x == y => 1.0,
            Some(_) => -2.0,
            None => self.min_cost(),
        }
    }

    fn max_cost(&self) -> f64 {
        1.0
    }

    fn min_cost(&self) -> f64 {
        -2.0
    }
}

const EXACT_MATCH: f64 = 5.0;
const APPROX_MATCH: f64 = 3.0;
const MISMATCH: f64 = -3.0;

/// Characters that sound or look alike enough to earn a partial match
const PHONETIC_CLASSES: [&[char]; 7] = [
    &['d', 't'],
    &['g', 'j'],
    &['l', 'r'],
    &['m', 'n'],
    &['b', 'p', 'v'],
    &['a', 'e', 'i', 'o', 'u'],
    &[',', '.'],
];

/// Phonetic table: 5 on a case-insensitive match, 3 within a phonetic class,
/// -3 otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubCostRange5ToMinus3;

impl SubCostRange5ToMinus3 {
    fn same_class(x: char, y: char) -> bool {
        PHONETIC_CLASSES
            .iter()
            .any(|class| class.contains(&x) && class.contains(&y))
    }
}

impl SubstitutionCost for SubCostRange5ToMinus3 {
    fn short_description(&self) -> &'static str {
        "SubCostRange5ToMinus3"
    }

    fn cost(&self, a: &[char], index_a: usize, b: &[char], index_b: usize) -> f64 {
        let Some((x, y)) = pair(a, index_a, b, index_b) else {
            return self.min_cost();
        };
        let x = x.to_ascii_lowercase();
        let y = y.to_ascii_lowercase();
        if x == y {
            EXACT_MATCH
        } else if Self::same_class(x, y) {
            APPROX_MATCH
        } else {
            MISMATCH
        }
    }

    fn max_cost(&self) -> f64 {
        EXACT_MATCH
    }

    fn min_cost(&self) -> f64 {
        MISMATCH
    }
}
