//! Token-set utilities
//!
//! Merges two token sequences and derives the counts the vector-space
//! metrics need. A value is created per similarity call; its counts describe
//! only the most recent merge.

use std::collections::{BTreeSet, HashMap};

/// Counts recorded by the last merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub first: usize,
    pub second: usize,
    pub merged: usize,
}

impl TokenCounts {
    /// Inclusion-exclusion: |a| + |b| - |a ∪ b|
    pub fn common_terms(&self) -> usize {
        (self.first + self.second).saturating_sub(self.merged)
    }
}

#[derive(Debug, Default)]
pub struct TokenSetUtilities {
    counts: TokenCounts,
}

impl TokenSetUtilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenation of both sequences, duplicates preserved
    pub fn create_merged_list(&mut self, first: &[String], second: &[String]) -> Vec<String> {
        let merged: Vec<String> = first.iter().chain(second).cloned().collect();
        self.counts = TokenCounts {
            first: first.len(),
            second: second.len(),
            merged: merged.len(),
        };
        merged
    }

    /// Union of both sequences; first/second record each side's unique count
    pub fn create_merged_set(&mut self, first: &[String], second: &[String]) -> BTreeSet<String> {
        let first_set: BTreeSet<&String> = first.iter().collect();
        let second_set: BTreeSet<&String> = second.iter().collect();
        let merged: BTreeSet<String> = first_set.union(&second_set).map(|t| (*t).clone()).collect();
        self.counts = TokenCounts {
            first: first_set.len(),
            second: second_set.len(),
            merged: merged.len(),
        };
        merged
    }

    /// Common terms of the last `create_merged_list` call
    pub fn common_terms(&self) -> usize {
        self.counts.common_terms()
    }

    /// Common terms of the last `create_merged_set` call
    pub fn common_set_terms(&self) -> usize {
        self.counts.common_terms()
    }

    pub fn first_token_count(&self) -> usize {
        self.counts.first
    }

    pub fn second_token_count(&self) -> usize {
        self.counts.second
    }

    pub fn merged_token_count(&self) -> usize {
        self.counts.merged
    }

    pub fn counts(&self) -> TokenCounts {
        self.counts
    }
}

/// Occurrence count per distinct token
pub fn term_frequencies(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counter: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counter.entry(token.as_str()).or_insert(0) += 1;
    }
    counter
}
