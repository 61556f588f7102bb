#![allow(dead_code)]

use std::sync::Once;

use simmetrics::{MetricConfig, StringMetric};

static TRACING: Once = Once::new();

/// Route library logs to the test writer. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Every metric in its default configuration
pub fn all_metrics() -> Vec<Box<dyn StringMetric>> {
    MetricConfig::names()
        .iter()
        .map(|name| {
            MetricConfig::by_name(name)
                .and_then(|config| config.build())
                .expect("default metric config must build")
        })
        .collect()
}

/// Metrics whose score is the same whichever argument comes first
pub fn symmetric_metrics() -> Vec<Box<dyn StringMetric>> {
    all_metrics()
        .into_iter()
        .filter(|m| {
            let name = m.short_description();
            name != "MongeElkan" && name != "MatchingCoefficient"
        })
        .collect()
}
