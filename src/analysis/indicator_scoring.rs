//! Surprise scoring for single releases and per-region aggregation.

use std::collections::HashSet;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Indicator, IndicatorCatalog, Observation, TypicalEffect};
use crate::error::AnalysisError;
use crate::models::{IndicatorScore, RegionResult};

/// Contribution of one release: |actual - forecast| * weight, signed by the
/// indicator's typical effect. Neutral indicators never score.
pub fn score(observation: &Observation, indicator: &Indicator) -> f64 {
    let magnitude = observation.deviation() * indicator.weight;
    // In-line release (or zero weight): no direction to assign
    if magnitude == 0.0 {
        return 0.0;
    }

    match indicator.typical_effect {
        TypicalEffect::Bullish => {
            if observation.actual > observation.forecast {
                magnitude
            } else {
                -magnitude
            }
        }
        TypicalEffect::Bearish => {
            if observation.actual < observation.forecast {
                magnitude
            } else {
                -magnitude
            }
        }
        TypicalEffect::Neutral => 0.0,
    }
}

/// Score every catalog indicator for one region.
///
/// Observations are matched to the catalog by name and reported in catalog order.
/// Indicators with no observation appear as blank 0/0/0 rows (score 0), so the
/// region table always lists the full catalog. An observation naming an unknown
/// indicator, or a second observation for the same one, aborts the run: skipping
/// it would silently under-count the aggregate.
pub fn aggregate(
    region_name: &str,
    catalog: &IndicatorCatalog,
    observations: &[Observation],
) -> Result<RegionResult, AnalysisError> {
    let mut by_position: Vec<Option<&Observation>> = vec![None; catalog.len()];
    let mut seen: HashSet<&str> = HashSet::with_capacity(observations.len());

    for obs in observations {
        let idx = catalog
            .position(&obs.indicator)
            .ok_or_else(|| AnalysisError::MissingIndicator {
                name: obs.indicator.clone(),
                region: Some(region_name.to_string()),
            })?;
        if !seen.insert(obs.indicator.as_str()) {
            return Err(AnalysisError::DuplicateObservation {
                name: obs.indicator.clone(),
                region: region_name.to_string(),
            });
        }
        by_position[idx] = Some(obs);
    }

    let indicator_scores: Vec<IndicatorScore> = catalog
        .iter()
        .zip(by_position)
        .map(|(indicator, obs)| {
            let observation = obs
                .cloned()
                .unwrap_or_else(|| Observation::blank(indicator.name.clone()));
            let value = score(&observation, indicator);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_indicator_scores
                && (DEBUG_FLAGS.print_scores_for_region.is_empty()
                    || DEBUG_FLAGS.print_scores_for_region == region_name)
            {
                log::info!(
                    "[score] {region_name} | {:<40} dev {:>8.3} x {:>5.1} => {:>+9.2}",
                    indicator.name,
                    observation.deviation(),
                    indicator.weight,
                    value
                );
            }

            IndicatorScore {
                indicator: indicator.clone(),
                observation,
                value,
            }
        })
        .collect();

    let aggregate_score = indicator_scores.iter().map(|s| s.value).sum();

    log::debug!(
        "{}: {} observations, aggregate {:.2}",
        region_name,
        observations.len(),
        aggregate_score
    );

    Ok(RegionResult {
        region_name: region_name.to_string(),
        indicator_scores,
        aggregate_score,
    })
}
