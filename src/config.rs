//! Metric configuration
//!
//! Serializable descriptions of a metric and its injected parts. A config is
//! the only way to pick a metric by name at runtime; every field defaults to
//! the metric's own defaults so `{"metric": "levenshtein"}` is a complete
//! config.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::costs::{
    AffineGap, AffineGapCost, SubCostRange0To1, SubCostRange1ToMinus2, SubCostRange5ToMinus3,
    SubstitutionCost,
};
use crate::error::{SimError, SimResult};
use crate::metrics::{
    needleman_wunsch, smith_waterman, BlockDistance, ChapmanLengthDeviation, ChapmanMeanLength,
    CosineSimilarity, DiceSimilarity, EuclideanDistance, JaccardSimilarity, Jaro, JaroWinkler,
    Levenshtein, MatchingCoefficient, MongeElkan, NeedlemanWunsch, OverlapCoefficient,
    QGramsDistance, SmithWaterman, SmithWatermanGotoh, SmithWatermanGotohWindowedAffine,
    StringMetric,
};
use crate::tokenizers::{QGram, StopTermFilter, Tokenizer, Whitespace};

/// Tokenizer selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenizerConfig {
    Whitespace {
        #[serde(default)]
        stop_terms: Vec<String>,
    },
    QGram {
        length: usize,
        #[serde(default)]
        extended: bool,
        #[serde(default)]
        skip: usize,
        #[serde(default)]
        stop_terms: Vec<String>,
    },
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::Whitespace {
            stop_terms: Vec::new(),
        }
    }
}

impl TokenizerConfig {
    /// Padded trigrams, the default of the q-grams distance
    pub fn qgram3_extended() -> Self {
        TokenizerConfig::QGram {
            length: 3,
            extended: true,
            skip: 0,
            stop_terms: Vec::new(),
        }
    }

    pub fn build(&self) -> SimResult<Box<dyn Tokenizer>> {
        match self {
            TokenizerConfig::Whitespace { stop_terms } => {
                if stop_terms.is_empty() {
                    Ok(Box::new(Whitespace::new()))
                } else {
                    let filter = StopTermFilter::new(stop_terms.iter().cloned());
                    Ok(Box::new(Whitespace::with_filter(Box::new(filter))))
                }
            }
            TokenizerConfig::QGram {
                length,
                extended,
                skip,
                stop_terms,
            } => {
                if *length == 0 {
                    return Err(SimError::InvalidConfig(
                        "q-gram length must be at least 1".to_string(),
                    ));
                }
                let mut tokenizer = QGram::new(*length, *extended).with_skip(*skip);
                if !stop_terms.is_empty() {
                    let filter = StopTermFilter::new(stop_terms.iter().cloned());
                    tokenizer = tokenizer.with_filter(Box::new(filter));
                }
                Ok(Box::new(tokenizer))
            }
        }
    }
}

/// Substitution table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubstitutionConfig {
    #[default]
    #[serde(rename = "range_0_to_1")]
    Range0To1,
    #[serde(rename = "range_1_to_minus_2")]
    Range1ToMinus2,
    #[serde(rename = "range_5_to_minus_3")]
    Range5ToMinus3,
}

impl SubstitutionConfig {
    pub fn build(&self) -> Box<dyn SubstitutionCost> {
        match self {
            SubstitutionConfig::Range0To1 => Box::new(SubCostRange0To1),
            SubstitutionConfig::Range1ToMinus2 => Box::new(SubCostRange1ToMinus2),
            SubstitutionConfig::Range5ToMinus3 => Box::new(SubCostRange5ToMinus3),
        }
    }
}

/// Affine gap parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapConfig {
    pub open: f64,
    pub extend: f64,
}

impl Default for GapConfig {
    fn default() -> Self {
        let gap = AffineGap::default();
        Self {
            open: gap.open(),
            extend: gap.extend(),
        }
    }
}

impl GapConfig {
    pub fn build(&self) -> SimResult<Box<dyn AffineGapCost>> {
        validate_cost("gap open", self.open)?;
        validate_cost("gap extend", self.extend)?;
        Ok(Box::new(AffineGap::new(self.open, self.extend)))
    }
}

fn validate_cost(name: &str, value: f64) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

fn default_qgram_tokenizer() -> TokenizerConfig {
    TokenizerConfig::qgram3_extended()
}

fn default_nw_gap_cost() -> f64 {
    needleman_wunsch::DEFAULT_GAP_COST
}

fn default_sw_gap_cost() -> f64 {
    smith_waterman::DEFAULT_GAP_COST
}

fn default_sw_substitution() -> SubstitutionConfig {
    SubstitutionConfig::Range1ToMinus2
}

fn default_phonetic_substitution() -> SubstitutionConfig {
    SubstitutionConfig::Range5ToMinus3
}

fn default_window_size() -> usize {
    smith_waterman::DEFAULT_WINDOW_SIZE
}

fn default_inner_metric() -> Box<MetricConfig> {
    Box::new(MetricConfig::SmithWatermanGotoh {
        substitution: default_phonetic_substitution(),
        gap: GapConfig::default(),
    })
}

/// A metric and its configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MetricConfig {
    BlockDistance {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    ChapmanMeanLength,
    ChapmanLengthDeviation,
    CosineSimilarity {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    DiceSimilarity {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    JaccardSimilarity {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    OverlapCoefficient {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    MatchingCoefficient {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    EuclideanDistance {
        #[serde(default)]
        tokenizer: TokenizerConfig,
    },
    QGramsDistance {
        #[serde(default = "default_qgram_tokenizer")]
        tokenizer: TokenizerConfig,
    },
    Jaro,
    JaroWinkler,
    Levenshtein {
        #[serde(default)]
        substitution: SubstitutionConfig,
    },
    NeedlemanWunsch {
        #[serde(default)]
        substitution: SubstitutionConfig,
        #[serde(default = "default_nw_gap_cost")]
        gap_cost: f64,
    },
    SmithWaterman {
        #[serde(default = "default_sw_substitution")]
        substitution: SubstitutionConfig,
        #[serde(default = "default_sw_gap_cost")]
        gap_cost: f64,
    },
    SmithWatermanGotoh {
        #[serde(default = "default_phonetic_substitution")]
        substitution: SubstitutionConfig,
        #[serde(default)]
        gap: GapConfig,
    },
    SmithWatermanGotohWindowedAffine {
        #[serde(default = "default_phonetic_substitution")]
        substitution: SubstitutionConfig,
        #[serde(default)]
        gap: GapConfig,
        #[serde(default = "default_window_size")]
        window_size: usize,
    },
    MongeElkan {
        #[serde(default)]
        tokenizer: TokenizerConfig,
        #[serde(default = "default_inner_metric")]
        inner: Box<MetricConfig>,
    },
}

impl Default for MetricConfig {
    fn default() -> Self {
        MetricConfig::Levenshtein {
            substitution: SubstitutionConfig::default(),
        }
    }
}

impl MetricConfig {
    /// Every metric name accepted by [`MetricConfig::by_name`]
    pub const NAMES: [&'static str; 18] = [
        "block_distance",
        "chapman_mean_length",
        "chapman_length_deviation",
        "cosine_similarity",
        "dice_similarity",
        "jaccard_similarity",
        "overlap_coefficient",
        "matching_coefficient",
        "euclidean_distance",
        "q_grams_distance",
        "jaro",
        "jaro_winkler",
        "levenshtein",
        "needleman_wunsch",
        "smith_waterman",
        "smith_waterman_gotoh",
        "smith_waterman_gotoh_windowed_affine",
        "monge_elkan",
    ];

    pub fn names() -> &'static [&'static str] {
        &Self::NAMES
    }

    /// Default configuration of the named metric
    pub fn by_name(name: &str) -> SimResult<Self> {
        serde_json::from_value(serde_json::json!({ "metric": name }))
            .map_err(|_| SimError::UnknownMetric(name.to_string()))
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Construct the configured metric
    pub fn build(&self) -> SimResult<Box<dyn StringMetric>> {
        let metric: Box<dyn StringMetric> = match self {
            MetricConfig::BlockDistance { tokenizer } => {
                Box::new(BlockDistance::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::ChapmanMeanLength => Box::new(ChapmanMeanLength::new()),
            MetricConfig::ChapmanLengthDeviation => Box::new(ChapmanLengthDeviation::new()),
            MetricConfig::CosineSimilarity { tokenizer } => {
                Box::new(CosineSimilarity::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::DiceSimilarity { tokenizer } => {
                Box::new(DiceSimilarity::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::JaccardSimilarity { tokenizer } => {
                Box::new(JaccardSimilarity::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::OverlapCoefficient { tokenizer } => {
                Box::new(OverlapCoefficient::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::MatchingCoefficient { tokenizer } => {
                Box::new(MatchingCoefficient::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::EuclideanDistance { tokenizer } => {
                Box::new(EuclideanDistance::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::QGramsDistance { tokenizer } => {
                Box::new(QGramsDistance::with_tokenizer(tokenizer.build()?))
            }
            MetricConfig::Jaro => Box::new(Jaro::new()),
            MetricConfig::JaroWinkler => Box::new(JaroWinkler::new()),
            MetricConfig::Levenshtein { substitution } => {
                Box::new(Levenshtein::with_cost(substitution.build()))
            }
            MetricConfig::NeedlemanWunsch {
                substitution,
                gap_cost,
            } => {
                validate_cost("gap_cost", *gap_cost)?;
                Box::new(NeedlemanWunsch::with_costs(substitution.build(), *gap_cost))
            }
            MetricConfig::SmithWaterman {
                substitution,
                gap_cost,
            } => {
                validate_cost("gap_cost", *gap_cost)?;
                Box::new(SmithWaterman::with_costs(substitution.build(), *gap_cost))
            }
            MetricConfig::SmithWatermanGotoh { substitution, gap } => Box::new(
                SmithWatermanGotoh::with_costs(substitution.build(), gap.build()?),
            ),
            MetricConfig::SmithWatermanGotohWindowedAffine {
                substitution,
                gap,
                window_size,
            } => Box::new(SmithWatermanGotohWindowedAffine::with_costs(
                substitution.build(),
                gap.build()?,
                *window_size,
            )),
            MetricConfig::MongeElkan { tokenizer, inner } => Box::new(
                MongeElkan::with_tokenizer_and_metric(tokenizer.build()?, inner.build()?),
            ),
        };
        debug!("🔧 Built metric: {}", metric.long_description());
        Ok(metric)
    }
}
