use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Indicator, Observation};

/// One indicator's contribution in one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScore {
    pub indicator: Indicator,
    pub observation: Observation,
    pub value: f64,
}

impl IndicatorScore {
    pub fn tone(&self) -> ScoreTone {
        ScoreTone::of(self.value)
    }
}

/// Sign class of a score, used by shells to colour table cells
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ScoreTone {
    Positive,
    Negative,
    Zero,
}

impl ScoreTone {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            ScoreTone::Positive
        } else if value < 0.0 {
            ScoreTone::Negative
        } else {
            ScoreTone::Zero
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub region_name: String,
    /// Catalog order
    pub indicator_scores: Vec<IndicatorScore>,
    pub aggregate_score: f64,
}

impl RegionResult {
    pub fn score_for(&self, indicator: &str) -> Option<f64> {
        self.indicator_scores
            .iter()
            .find(|s| s.indicator.name == indicator)
            .map(|s| s.value)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    /// No statement was entered
    Empty,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Empty => write!(f, "No statement entered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub text: String,
    /// In [-1, 1]; 0 is neutral
    pub polarity: f64,
    pub label: SentimentLabel,
    pub score_contribution: f64,
}

impl SentimentResult {
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            polarity: 0.0,
            label: SentimentLabel::Empty,
            score_contribution: 0.0,
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Decision {
    Buy,
    Sell,
    Neutral,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Decision::Buy => write!(f, "BUY"),
            Decision::Sell => write!(f, "SELL"),
            Decision::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum DurationLabel {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl fmt::Display for DurationLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DurationLabel::ShortTerm => write!(f, "short term (<24h)"),
            DurationLabel::MediumTerm => write!(f, "medium term (24-48h)"),
            DurationLabel::LongTerm => write!(f, "long term (>48h)"),
        }
    }
}

/// Complete output of one analysis run. Never mutated after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub pair_name: String,
    pub region1: RegionResult,
    pub region2: RegionResult,
    pub sentiment: SentimentResult,
    pub total_score: f64,
    pub decision: Decision,
    pub duration_hours: f64,
    pub duration_label: DurationLabel,
}
