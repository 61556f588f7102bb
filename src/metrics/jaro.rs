//! Jaro and Jaro-Winkler similarity
//!
//! Good for names and short strings. Jaro-Winkler boosts pairs sharing a
//! common prefix.

use super::{chars, unit, StringMetric};

const JARO_COST_MS: f64 = 4.12e-5;
const JARO_WINKLER_COST_MS: f64 = 4.4e-5;

/// Longest prefix Jaro-Winkler rewards
pub const MAX_PREFIX_LENGTH: usize = 4;

/// Weight of each shared prefix character
pub const PREFIX_SCALE: f64 = 0.1;

/// Characters of `first` that appear in `second` within `window` positions,
/// in `first` order. Each character of `second` is used at most once.
fn common_characters(first: &[char], second: &[char], window: usize) -> Vec<char> {
    let mut available: Vec<Option<char>> = second.iter().copied().map(Some).collect();
    let mut common = Vec::new();

    for (i, &ch) in first.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window).min(second.len());
        if lo >= hi {
            continue;
        }
        if let Some(slot) = available[lo..hi].iter_mut().find(|c| **c == Some(ch)) {
            *slot = None;
            common.push(ch);
        }
    }
    common
}

fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = a.len().min(b.len()) / 2 + 1;
    let common_a = common_characters(a, b, window);
    let common_b = common_characters(b, a, window);
    if common_a.is_empty() || common_b.is_empty() || common_a.len() != common_b.len() {
        return 0.0;
    }

    let transpositions = common_a
        .iter()
        .zip(&common_b)
        .filter(|(x, y)| x != y)
        .count()
        / 2;

    let common = common_a.len() as f64;
    unit(
        (common / a.len() as f64
            + common / b.len() as f64
            + (common - transpositions as f64) / common)
            / 3.0,
    )
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .zip(b)
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(x, y)| x == y)
        .count()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Jaro;

impl Jaro {
    pub fn new() -> Self {
        Self
    }
}

impl StringMetric for Jaro {
    fn short_description(&self) -> String {
        "Jaro".to_string()
    }

    fn long_description(&self) -> String {
        "Jaro similarity: matching characters within half the shorter length, less transpositions"
            .to_string()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro(&chars(a), &chars(b))
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        la * lb * JARO_COST_MS
    }
}

/// Jaro with a bonus of 0.1 per shared prefix character, up to four
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl JaroWinkler {
    pub fn new() -> Self {
        Self
    }
}

impl StringMetric for JaroWinkler {
    fn short_description(&self) -> String {
        "JaroWinkler".to_string()
    }

    fn long_description(&self) -> String {
        format!(
            "Jaro-Winkler similarity, prefix scale {} up to {} characters",
            PREFIX_SCALE, MAX_PREFIX_LENGTH
        )
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = chars(a);
        let b = chars(b);
        let score = jaro(&a, &b);
        let prefix = common_prefix(&a, &b) as f64;
        unit(score + prefix * PREFIX_SCALE * (1.0 - score))
    }

    fn unnormalized_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    fn estimated_cost(&self, a: &str, b: &str) -> f64 {
        let la = a.chars().count() as f64;
        let lb = b.chars().count() as f64;
        la * lb * JARO_WINKLER_COST_MS
    }
}
