use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analysis::decision::{classify, combine, estimate_duration};
use crate::analysis::indicator_scoring::aggregate;
use crate::analysis::lexicon::LexiconPolarity;
use crate::analysis::sentiment::{TextPolarityProvider, analyze_sentiment};
use crate::config::AnalysisConfig;
#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{IndicatorCatalog, Observation, Pair, WeightOverrides};
use crate::error::AnalysisError;
use crate::models::AnalysisResult;

/// Everything the shell hands over for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub pair: Pair,
    #[serde(default)]
    pub region1_observations: Vec<Observation>,
    #[serde(default)]
    pub region2_observations: Vec<Observation>,
    #[serde(default)]
    pub weight_overrides: WeightOverrides,
    /// Optional central bank / official statement
    #[serde(default)]
    pub statement: String,
}

impl AnalysisRequest {
    pub fn new(pair: Pair) -> Self {
        Self {
            pair,
            region1_observations: Vec::new(),
            region2_observations: Vec::new(),
            weight_overrides: WeightOverrides::new(),
            statement: String::new(),
        }
    }
}

/// Run the whole pipeline for one request.
///
/// catalog (with overrides) -> per-region scores -> sentiment -> total -> decision + duration.
/// Pure apart from the provider call: nothing is cached or shared between calls.
pub fn analyze(
    request: &AnalysisRequest,
    config: &AnalysisConfig,
    provider: &dyn TextPolarityProvider,
) -> Result<AnalysisResult, AnalysisError> {
    if !config.decision.is_ordered() {
        return Err(AnalysisError::InvalidThresholds {
            buy: config.decision.buy,
            sell: config.decision.sell,
        });
    }

    let catalog = IndicatorCatalog::with_overrides(&request.weight_overrides)?;

    let region1 = aggregate(
        &request.pair.region1,
        &catalog,
        &request.region1_observations,
    )?;
    let region2 = aggregate(
        &request.pair.region2,
        &catalog,
        &request.region2_observations,
    )?;

    let sentiment = analyze_sentiment(&request.statement, provider, &config.sentiment)?;

    let total_score = combine(&region1, &region2, &sentiment);
    let decision = classify(total_score, &config.decision);
    let (duration_hours, duration_label) = estimate_duration(total_score, &config.duration);

    log::info!(
        "{}: {:.2} - {:.2} + {:.2} = {:.2} => {} ({:.1}h)",
        request.pair.name,
        region1.aggregate_score,
        region2.aggregate_score,
        sentiment.score_contribution,
        total_score,
        decision,
        duration_hours
    );

    Ok(AnalysisResult {
        pair_name: request.pair.name.clone(),
        region1,
        region2,
        sentiment,
        total_score,
        decision,
        duration_hours,
        duration_label,
    })
}

/// Owns the run configuration and the polarity provider shared by every run.
#[derive(Clone)]
pub struct PairAnalyzer {
    config: AnalysisConfig,
    provider: Arc<dyn TextPolarityProvider>,
}

impl PairAnalyzer {
    pub fn new(config: AnalysisConfig, provider: Arc<dyn TextPolarityProvider>) -> Self {
        Self { config, provider }
    }

    /// Default thresholds with the built-in lexicon provider
    pub fn with_lexicon(config: AnalysisConfig) -> Self {
        Self::new(config, Arc::new(LexiconPolarity::new()))
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        analyze(request, &self.config, self.provider.as_ref())
    }

    /// Run independent requests in parallel. Results come back in input order;
    /// one failing request does not affect the others.
    pub fn analyze_batch(
        &self,
        requests: &[AnalysisRequest],
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_batch_progress {
            log::info!("[batch] analysing {} requests", requests.len());
        }

        requests
            .par_iter()
            .map(|request| self.analyze(request))
            .collect()
    }
}

impl Default for PairAnalyzer {
    fn default() -> Self {
        Self::with_lexicon(AnalysisConfig::default())
    }
}

impl std::fmt::Debug for PairAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
