use simmetrics::metrics::{
    BlockDistance, ChapmanLengthDeviation, ChapmanMeanLength, CosineSimilarity, DiceSimilarity,
    JaccardSimilarity, Jaro, JaroWinkler, Levenshtein, MongeElkan, OverlapCoefficient,
    QGramsDistance,
};
use simmetrics::tokenizers::{QGram, StopTermFilter, Whitespace};
use simmetrics::{find_best_match, MetricConfig, SimError, StringMetric, Tokenizer};

mod common;
use common::{all_metrics, init_tracing};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {} got {}",
        expected,
        actual
    );
}

#[test]
fn test_edit_distance_reference_values() {
    init_tracing();
    let metric = Levenshtein::new();
    assert_eq!(metric.unnormalized_similarity("kitten", "sitting"), 3.0);
    assert_close(metric.similarity("kitten", "sitting"), 4.0 / 7.0, 1e-12);
}

#[test]
fn test_jaro_family_reference_values() {
    let (jaro, winkler) = (Jaro::new(), JaroWinkler::new());
    assert_close(jaro.similarity("MARTHA", "MARHTA"), 0.9444, 1e-4);
    assert_close(winkler.similarity("MARTHA", "MARHTA"), 0.9611, 1e-4);
    assert_close(jaro.similarity("DIXON", "DICKSONX"), 0.7667, 1e-4);
    assert_close(winkler.similarity("DIXON", "DICKSONX"), 0.8133, 1e-4);
}

#[test]
fn test_token_set_reference_values() {
    let (a, b) = ("a b c", "b c d");
    assert_close(JaccardSimilarity::new().similarity(a, b), 0.5, 1e-12);
    assert_close(DiceSimilarity::new().similarity(a, b), 2.0 / 3.0, 1e-12);
    assert_close(CosineSimilarity::new().similarity(a, b), 2.0 / 3.0, 1e-12);
    assert_close(OverlapCoefficient::new().similarity(a, b), 2.0 / 3.0, 1e-12);
    assert_close(BlockDistance::new().similarity(a, b), 4.0 / 6.0, 1e-12);
    assert_eq!(BlockDistance::new().unnormalized_similarity(a, b), 2.0);
}

#[test]
fn test_length_measures() {
    let long = "a".repeat(300);
    assert_eq!(ChapmanMeanLength::new().similarity(&long, &long), 1.0);
    assert!(ChapmanMeanLength::new().similarity("ab", "cd") < 0.1);
    assert_close(
        ChapmanLengthDeviation::new().similarity("abc", "abcdef"),
        0.5,
        1e-12,
    );
}

#[test]
fn test_tokenizers_through_public_api() {
    assert_eq!(Whitespace::new().tokenize("a  b"), vec!["a", "", "b"]);
    assert!(!QGram::q3_extended().tokenize("ab").is_empty());

    let filtered = Whitespace::with_filter(Box::new(StopTermFilter::new(["the"])));
    assert_eq!(filtered.tokenize("the cat"), vec!["cat"]);

    let metric = QGramsDistance::with_tokenizer(Box::new(QGram::q2()));
    assert_eq!(metric.similarity("night", "night"), 1.0);
}

#[test]
fn test_monge_elkan_is_asymmetric() {
    let metric = MongeElkan::with_metric(Box::new(Levenshtein::new()));
    assert_close(metric.similarity("hello world", "hello"), 0.6, 1e-12);
    assert_eq!(metric.similarity("hello", "hello world"), 1.0);
}

#[test]
fn test_explain_is_not_implemented() {
    for metric in all_metrics() {
        assert!(matches!(
            metric.explain("a", "b"),
            Err(SimError::NotImplemented(_))
        ));
    }
}

#[test]
fn test_batch_helpers() {
    init_tracing();
    let metric = Levenshtein::new();
    let set: &[&str] = &["abc", "abd", "xyz"];

    let scores = metric.batch_compare_set(Some(set), Some("abc")).unwrap();
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0], 1.0);
    assert_eq!(scores[2], 0.0);

    let shorter = ["abc"];
    let pairwise = metric
        .batch_compare_sets(Some(&set[..]), Some(&shorter[..]))
        .unwrap();
    assert_eq!(pairwise, vec![1.0]);

    assert!(matches!(
        metric.batch_compare_set(None, Some("abc")),
        Err(SimError::InvalidArgument(_))
    ));
    assert!(matches!(
        metric.batch_compare_sets(Some(&set[..]), None),
        Err(SimError::InvalidArgument(_))
    ));
}

#[test]
fn test_config_builds_working_metrics() {
    init_tracing();
    let metric = MetricConfig::from_json(r#"{"metric": "jaro_winkler"}"#)
        .unwrap()
        .build()
        .unwrap();
    assert_close(metric.similarity("MARTHA", "MARHTA"), 0.9611, 1e-4);

    assert_eq!(all_metrics().len(), MetricConfig::names().len());
    assert!(matches!(
        MetricConfig::by_name("hamming"),
        Err(SimError::UnknownMetric(_))
    ));
}

#[test]
fn test_fuzzy_search_with_any_metric() {
    let candidates = ["Radiohead", "Portishead", "Massive Attack"];
    let metrics: Vec<Box<dyn StringMetric>> =
        vec![Box::new(Levenshtein::new()), Box::new(JaroWinkler::new())];
    for metric in metrics {
        let best = find_best_match(metric.as_ref(), "radiohed", &candidates, 0.5);
        assert_eq!(best.map(|m| m.value), Some("Radiohead".to_string()));
    }
}
