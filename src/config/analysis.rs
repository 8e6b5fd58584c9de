//! Scoring and classification configuration

use serde::{Deserialize, Serialize};

/// Score thresholds for the Buy / Sell / Neutral call.
/// Both comparisons are strict, so a score sitting exactly on a threshold is Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    pub buy: f64,
    pub sell: f64,
}

/// Mapping from |total score| to an expected trend duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationSettings {
    // Hours of trend per point of absolute total score
    pub hours_per_point: f64,
    pub min_hours: f64,
    pub max_hours: f64,
    // Bucket upper bounds (inclusive), applied to the clamped hours
    pub short_term_max_hours: f64,
    pub medium_term_max_hours: f64,
}

/// What to do when the polarity provider fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SentimentFailurePolicy {
    /// Surface the provider error to the caller
    #[default]
    Propagate,
    /// Score the statement as if no text had been entered
    TreatAsEmpty,
}

/// Settings for statement sentiment scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSettings {
    // Polarity strictly above this is Positive
    pub positive_threshold: f64,
    // Polarity strictly below this is Negative
    pub negative_threshold: f64,
    // Polarity in [-1, 1] is multiplied by this to get score points
    pub score_scale: f64,
    pub failure_policy: SentimentFailurePolicy,
}

/// The Master Analysis Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub decision: DecisionThresholds,
    pub duration: DurationSettings,
    pub sentiment: SentimentSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    decision: DecisionThresholds {
        buy: 20.0,
        sell: -20.0,
    },

    duration: DurationSettings {
        hours_per_point: 12.0,
        min_hours: 1.0,
        max_hours: 72.0,
        short_term_max_hours: 24.0,
        medium_term_max_hours: 48.0,
    },

    sentiment: SentimentSettings {
        positive_threshold: 0.1,
        negative_threshold: -0.1,
        score_scale: 50.0,
        failure_policy: SentimentFailurePolicy::Propagate,
    },
};

impl Default for AnalysisConfig {
    fn default() -> Self {
        ANALYSIS
    }
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        ANALYSIS.decision
    }
}

impl Default for DurationSettings {
    fn default() -> Self {
        ANALYSIS.duration
    }
}

impl Default for SentimentSettings {
    fn default() -> Self {
        ANALYSIS.sentiment
    }
}

impl DecisionThresholds {
    /// A sell threshold above the buy threshold would make the classifier ambiguous.
    pub fn is_ordered(&self) -> bool {
        self.sell <= self.buy
    }
}
