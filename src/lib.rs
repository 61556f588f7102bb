//! SimMetrics Library
//!
//! String similarity metrics: token set and vector measures, edit distances,
//! local and global alignments, Jaro-family measures and Monge-Elkan, with
//! pluggable tokenizers and cost functions.

pub mod config;
pub mod costs;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod tokenizers;

pub use config::{GapConfig, MetricConfig, SubstitutionConfig, TokenizerConfig};
pub use error::{SimError, SimResult};
pub use matching::{find_best_match, find_matches, FuzzyMatch};
pub use metrics::StringMetric;
pub use tokenizers::Tokenizer;
