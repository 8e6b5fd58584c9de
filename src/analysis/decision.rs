//! Cross-region combination, Buy/Sell/Neutral classification and trend duration.

use crate::config::{DecisionThresholds, DurationSettings};
use crate::models::{Decision, DurationLabel, RegionResult, SentimentResult};

/// region1 - region2 + sentiment.
/// Region 2 is the quote side of the pair, so its strength counts against the pair.
pub fn combine(region1: &RegionResult, region2: &RegionResult, sentiment: &SentimentResult) -> f64 {
    region1.aggregate_score - region2.aggregate_score + sentiment.score_contribution
}

/// Strict comparisons: a score exactly on a threshold is Neutral.
pub fn classify(total_score: f64, thresholds: &DecisionThresholds) -> Decision {
    if total_score > thresholds.buy {
        Decision::Buy
    } else if total_score < thresholds.sell {
        Decision::Sell
    } else {
        Decision::Neutral
    }
}

/// Expected trend length in hours, clamped to [min_hours, max_hours], and its bucket.
/// The bucket is taken from the clamped value, so the ceiling caps the label too.
/// A NaN total (regions overflowing to opposite infinities) maps to the ceiling.
pub fn estimate_duration(total_score: f64, settings: &DurationSettings) -> (f64, DurationLabel) {
    let raw_hours = total_score.abs() * settings.hours_per_point;
    let hours = if raw_hours.is_nan() {
        settings.max_hours
    } else {
        raw_hours.clamp(settings.min_hours, settings.max_hours)
    };

    let label = if hours <= settings.short_term_max_hours {
        DurationLabel::ShortTerm
    } else if hours <= settings.medium_term_max_hours {
        DurationLabel::MediumTerm
    } else {
        DurationLabel::LongTerm
    };

    (hours, label)
}
