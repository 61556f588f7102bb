//! Fuzzy candidate search
//!
//! Ranks a list of candidate strings against a search term with any
//! [`StringMetric`].

use std::cmp::Ordering;

use tracing::debug;

use crate::metrics::StringMetric;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Find matches in a list of candidates
///
/// Case-insensitive exact matches come first with score 1.0. The remaining
/// candidates are scored on their lowercased forms and kept when the score
/// reaches `cutoff`. Returns at most `n` matches, best first.
pub fn find_matches<S: AsRef<str>>(
    metric: &dyn StringMetric,
    search_term: &str,
    candidates: &[S],
    n: usize,
    cutoff: f64,
) -> Vec<FuzzyMatch> {
    let search_lower = search_term.to_lowercase();
    let lowered: Vec<String> = candidates
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    let mut matches: Vec<FuzzyMatch> = Vec::new();
    let mut exact = vec![false; candidates.len()];

    for (i, candidate) in candidates.iter().enumerate() {
        if lowered[i] == search_lower {
            exact[i] = true;
            matches.push(FuzzyMatch {
                value: candidate.as_ref().to_string(),
                score: 1.0,
            });
        }
    }

    for (i, candidate) in candidates.iter().enumerate() {
        if exact[i] {
            continue;
        }
        let score = metric.similarity(&search_lower, &lowered[i]);
        if score >= cutoff {
            matches.push(FuzzyMatch {
                value: candidate.as_ref().to_string(),
                score,
            });
        }
    }

    // Stable sort keeps exact matches ahead of equal fuzzy scores
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(n);

    debug!(
        "{} matches for '{}' with {} (cutoff {})",
        matches.len(),
        search_term,
        metric.short_description(),
        cutoff
    );
    matches
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match<S: AsRef<str>>(
    metric: &dyn StringMetric,
    search_term: &str,
    candidates: &[S],
    cutoff: f64,
) -> Option<FuzzyMatch> {
    find_matches(metric, search_term, candidates, 1, cutoff)
        .into_iter()
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{JaroWinkler, Levenshtein, MongeElkan};

    #[test]
    fn test_find_matches() {
        let candidates = vec![
            "Beethoven".to_string(),
            "Bach".to_string(),
            "Brahms".to_string(),
        ];

        let matches = find_matches(&Levenshtein::new(), "beethoven", &candidates, 5, 0.6);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "Beethoven");
        assert_eq!(matches[0].score, 1.0);
    }

    #[test]
    fn test_matches_are_ranked_and_truncated() {
        let candidates = ["play", "plays", "played", "pause", "stop"];
        let metric = Levenshtein::new();

        let matches = find_matches(&metric, "play", &candidates, 2, 0.5);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].value, "play");
        assert_eq!(matches[1].value, "plays");
        assert!((matches[1].score - 0.8).abs() < 1e-12);

        let all = find_matches(&metric, "play", &candidates, 10, 0.5);
        assert!(all.iter().all(|m| m.value != "stop"));
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_find_best_match() {
        let candidates = vec!["The Beatles".to_string(), "Beach Boys".to_string()];

        let best = find_best_match(&MongeElkan::new(), "beatles", &candidates, 0.6);
        assert_eq!(best.map(|m| m.value), Some("The Beatles".to_string()));
    }

    #[test]
    fn test_no_match_above_cutoff() {
        let candidates = ["xyz", "qrs"];
        assert!(find_best_match(&JaroWinkler::new(), "abc", &candidates, 0.5).is_none());
        assert!(find_matches(&JaroWinkler::new(), "abc", &candidates, 0, 0.0).is_empty());
    }
}
