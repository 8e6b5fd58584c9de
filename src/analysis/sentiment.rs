//! Statement sentiment: text -> bounded polarity -> label and score points.

use crate::config::{SentimentFailurePolicy, SentimentSettings};
#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::error::SentimentProviderError;
use crate::models::{SentimentLabel, SentimentResult};

/// Source of text polarity.
///
/// Implementations must return a value in [-1, 1] (negative = bearish tone,
/// 0 = neutral) and be deterministic for identical input within a session.
/// The engine calls this synchronously and adds no locking of its own.
pub trait TextPolarityProvider: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, SentimentProviderError>;
}

// Lets shells and tests plug in a closure as the provider
impl<F> TextPolarityProvider for F
where
    F: Fn(&str) -> Result<f64, SentimentProviderError> + Send + Sync,
{
    fn polarity(&self, text: &str) -> Result<f64, SentimentProviderError> {
        self(text)
    }
}

fn checked_polarity(polarity: f64) -> Result<f64, SentimentProviderError> {
    if polarity.is_finite() && (-1.0..=1.0).contains(&polarity) {
        Ok(polarity)
    } else {
        Err(SentimentProviderError::OutOfRange { polarity })
    }
}

pub fn label_for(polarity: f64, settings: &SentimentSettings) -> SentimentLabel {
    if polarity > settings.positive_threshold {
        SentimentLabel::Positive
    } else if polarity < settings.negative_threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Score a free-text statement.
///
/// Blank text never reaches the provider and scores as `Empty`. A provider
/// failure is returned unless the policy is `TreatAsEmpty`, in which case the
/// statement is scored as if blank.
pub fn analyze_sentiment(
    text: &str,
    provider: &dyn TextPolarityProvider,
    settings: &SentimentSettings,
) -> Result<SentimentResult, SentimentProviderError> {
    if text.trim().is_empty() {
        return Ok(SentimentResult::empty(text));
    }

    let polarity = match provider.polarity(text).and_then(checked_polarity) {
        Ok(p) => p,
        Err(e) => match settings.failure_policy {
            SentimentFailurePolicy::Propagate => return Err(e),
            SentimentFailurePolicy::TreatAsEmpty => {
                log::warn!("⚠️  Sentiment ignored, provider failed: {}", e);
                return Ok(SentimentResult::empty(text));
            }
        },
    };

    let label = label_for(polarity, settings);
    let score_contribution = polarity * settings.score_scale;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_sentiment_details {
        log::info!(
            "[sentiment] polarity {:+.3} => {} ({:+.2} pts)",
            polarity,
            label,
            score_contribution
        );
    }

    Ok(SentimentResult {
        text: text.to_string(),
        polarity,
        label,
        score_contribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fixed(p: f64) -> impl Fn(&str) -> Result<f64, SentimentProviderError> + Send + Sync {
        move |_: &str| Ok(p)
    }

    fn failing(_: &str) -> Result<f64, SentimentProviderError> {
        Err(SentimentProviderError::Unavailable("timeout".to_string()))
    }

    #[test]
    fn blank_text_is_empty_and_skips_provider() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &str| -> Result<f64, SentimentProviderError> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(0.9)
        };
        let settings = SentimentSettings::default();

        for text in ["", "   ", "\n\t"] {
            let result = analyze_sentiment(text, &counting, &settings).unwrap();
            assert_eq!(result.label, SentimentLabel::Empty);
            assert_eq!(result.score_contribution, 0.0);
            assert_eq!(result.polarity, 0.0);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn labels_use_strict_thresholds() {
        let settings = SentimentSettings::default();
        assert_eq!(label_for(0.1, &settings), SentimentLabel::Neutral);
        assert_eq!(label_for(0.11, &settings), SentimentLabel::Positive);
        assert_eq!(label_for(-0.1, &settings), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.11, &settings), SentimentLabel::Negative);
        assert_eq!(label_for(0.0, &settings), SentimentLabel::Neutral);
    }

    #[test]
    fn contribution_is_polarity_times_fifty() {
        let settings = SentimentSettings::default();
        let result = analyze_sentiment("hawkish", &fixed(0.4), &settings).unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!((result.score_contribution - 20.0).abs() < 1e-9);

        let result = analyze_sentiment("dovish", &fixed(-1.0), &settings).unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.score_contribution, -50.0);
        assert_eq!(result.text, "dovish");
    }

    #[test]
    fn provider_failure_propagates_by_default() {
        let settings = SentimentSettings::default();
        assert_eq!(
            analyze_sentiment("anything", &failing, &settings),
            Err(SentimentProviderError::Unavailable("timeout".to_string()))
        );
    }

    #[test]
    fn provider_failure_can_be_treated_as_empty() {
        let settings = SentimentSettings {
            failure_policy: SentimentFailurePolicy::TreatAsEmpty,
            ..Default::default()
        };
        let result = analyze_sentiment("anything", &failing, &settings).unwrap();
        assert_eq!(result.label, SentimentLabel::Empty);
        assert_eq!(result.score_contribution, 0.0);
    }

    #[test]
    fn out_of_range_polarity_is_a_provider_error() {
        let settings = SentimentSettings::default();
        for bad in [1.5, -1.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                analyze_sentiment("text", &fixed(bad), &settings),
                Err(SentimentProviderError::OutOfRange { .. })
            ));
        }
    }
}
