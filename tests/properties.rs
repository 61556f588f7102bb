use proptest::prelude::*;
use simmetrics::metrics::{Levenshtein, SmithWatermanGotoh, SmithWatermanGotohWindowedAffine};
use simmetrics::StringMetric;

mod common;
use common::{all_metrics, symmetric_metrics};

const EPSILON: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn similarity_is_bounded(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        for metric in all_metrics() {
            let score = metric.similarity(&a, &b);
            prop_assert!(
                (0.0..=1.0).contains(&score),
                "{} gave {} for {:?} / {:?}",
                metric.short_description(),
                score,
                a,
                b
            );
        }
    }

    #[test]
    fn identical_strings_score_one(s in "[a-d ]{0,12}") {
        for metric in all_metrics() {
            // Mean length rewards long inputs, not equal ones
            if metric.short_description() == "ChapmanMeanLength" {
                continue;
            }
            let score = metric.similarity(&s, &s);
            prop_assert!(
                (score - 1.0).abs() < EPSILON,
                "{} gave {} for {:?}",
                metric.short_description(),
                score,
                s
            );
        }
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-d ]{0,12}", b in "[a-d ]{0,12}") {
        for metric in symmetric_metrics() {
            let forward = metric.similarity(&a, &b);
            let backward = metric.similarity(&b, &a);
            prop_assert!(
                (forward - backward).abs() < EPSILON,
                "{}: {} vs {} for {:?} / {:?}",
                metric.short_description(),
                forward,
                backward,
                a,
                b
            );
        }
    }

    #[test]
    fn absent_input_scores_zero(s in "\\PC{0,8}") {
        for metric in all_metrics() {
            prop_assert_eq!(metric.similarity_opt(None, Some(&s)), 0.0);
            prop_assert_eq!(metric.similarity_opt(Some(&s), None), 0.0);
            prop_assert_eq!(metric.unnormalized_similarity_opt(None, None), 0.0);
        }
    }

    #[test]
    fn explain_is_never_implemented(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        for metric in all_metrics() {
            prop_assert!(metric.explain(&a, &b).is_err());
        }
    }

    #[test]
    fn levenshtein_matches_reference(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let ours = Levenshtein::new().unnormalized_similarity(&a, &b);
        prop_assert_eq!(ours, strsim::levenshtein(&a, &b) as f64);
    }

    #[test]
    fn wide_window_matches_unbounded_gotoh(a in "[a-f]{0,20}", b in "[a-f]{0,20}") {
        let unbounded = SmithWatermanGotoh::new();
        let windowed = SmithWatermanGotohWindowedAffine::new();
        prop_assert_eq!(
            unbounded.unnormalized_similarity(&a, &b),
            windowed.unnormalized_similarity(&a, &b)
        );
        prop_assert_eq!(unbounded.similarity(&a, &b), windowed.similarity(&a, &b));
    }

    #[test]
    fn estimated_cost_is_non_negative(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        for metric in all_metrics() {
            prop_assert!(metric.estimated_cost(&a, &b) >= 0.0);
        }
    }
}
