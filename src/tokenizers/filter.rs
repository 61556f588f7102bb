//! Term filters
//!
//! Decide which generated tokens are dropped before they reach a metric.

use std::collections::BTreeSet;
use std::fmt;

/// Predicate over generated terms
pub trait TermFilter: fmt::Debug + Send + Sync {
    /// True when `term` must be dropped from the token stream
    fn is_filtered(&self, term: &str) -> bool;

    fn short_description(&self) -> &'static str;
}

/// Accepts every term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl TermFilter for NoFilter {
    fn is_filtered(&self, _term: &str) -> bool {
        false
    }

    fn short_description(&self) -> &'static str {
        "NoFilter"
    }
}

/// Drops a fixed set of stop terms (exact, case-sensitive comparison)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopTermFilter {
    terms: BTreeSet<String>,
}

impl StopTermFilter {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_term(mut self, term: &str) -> Self {
        self.terms.insert(term.to_string());
        self
    }

    #[must_use]
    pub fn without_term(mut self, term: &str) -> Self {
        self.terms.remove(term);
        self
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl TermFilter for StopTermFilter {
    fn is_filtered(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    fn short_description(&self) -> &'static str {
        "StopTermFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_accepts_everything() {
        assert!(!NoFilter.is_filtered(""));
        assert!(!NoFilter.is_filtered("the"));
    }

    #[test]
    fn test_stop_term_builder() {
        let filter = StopTermFilter::new(["the", "a"])
            .with_term("an")
            .without_term("a");
        assert_eq!(filter.len(), 2);
        assert!(filter.is_filtered("the"));
        assert!(filter.is_filtered("an"));
        assert!(!filter.is_filtered("a"));
        assert!(!filter.is_filtered("The"));
        assert_eq!(filter.terms().collect::<Vec<_>>(), vec!["an", "the"]);
    }

    #[test]
    fn test_empty_stop_filter() {
        let filter = StopTermFilter::default();
        assert!(filter.is_empty());
        assert!(!filter.is_filtered("anything"));
    }
}
