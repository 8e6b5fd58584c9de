// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use analysis::{AnalysisRequest, LexiconPolarity, PairAnalyzer, TextPolarityProvider, analyze};
pub use config::{ANALYSIS, AnalysisConfig, SentimentFailurePolicy};
pub use domain::{Indicator, IndicatorCatalog, Observation, Pair, TypicalEffect, WeightOverrides};
pub use error::{AnalysisError, SentimentProviderError};
pub use models::{AnalysisReport, AnalysisResult, Decision, DurationLabel, SentimentLabel};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the observations for both regions (and optionally pair, overrides, statement)
    pub request: Option<PathBuf>,

    /// Pair to analyse, e.g. "USD/JPY". Takes precedence over the pair named in the file
    #[arg(long)]
    pub pair: Option<String>,

    /// Total score above which the call is BUY
    #[arg(long, allow_hyphen_values = true)]
    pub buy_threshold: Option<f64>,

    /// Total score below which the call is SELL
    #[arg(long, allow_hyphen_values = true)]
    pub sell_threshold: Option<f64>,

    /// Score the statement as empty instead of failing when the sentiment provider errors
    #[arg(long, default_value_t = false)]
    pub sentiment_fallback: bool,

    /// Print the full result as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// List the built-in pairs and exit
    #[arg(long, default_value_t = false)]
    pub list_pairs: bool,

    /// List the indicator catalog (with default weights) and exit
    #[arg(long, default_value_t = false)]
    pub list_indicators: bool,
}

impl Cli {
    /// Built-in configuration with the command-line overrides applied
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = ANALYSIS;
        if let Some(buy) = self.buy_threshold {
            config.decision.buy = buy;
        }
        if let Some(sell) = self.sell_threshold {
            config.decision.sell = sell;
        }
        if self.sentiment_fallback {
            config.sentiment.failure_policy = SentimentFailurePolicy::TreatAsEmpty;
        }
        config
    }
}

/// On-disk request format. Same as `AnalysisRequest` except the pair is named,
/// and may be left out in favour of `--pair` or the default pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub pair: Option<String>,
    #[serde(default)]
    pub region1_observations: Vec<Observation>,
    #[serde(default)]
    pub region2_observations: Vec<Observation>,
    #[serde(default)]
    pub weight_overrides: WeightOverrides,
    #[serde(default)]
    pub statement: String,
}

impl RequestFile {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse request file {:?}", path))
    }

    /// Resolve the pair (`pair_arg`, then the file, then the default pair).
    pub fn into_request(self, pair_arg: Option<&str>) -> Result<AnalysisRequest> {
        let pair_name = pair_arg
            .map(str::to_string)
            .or(self.pair)
            .unwrap_or_else(|| config::DEFAULT_PAIR_NAME.to_string());
        if Pair::get_base_and_quote(&pair_name).is_none() {
            bail!("Malformed pair '{}', expected BASE/QUOTE", pair_name);
        }
        let pair = Pair::lookup(&pair_name).ok_or_else(|| {
            let known: Vec<String> = Pair::builtin().into_iter().map(|p| p.name).collect();
            anyhow!("Unknown pair '{}' (known: {})", pair_name, known.join(", "))
        })?;

        Ok(AnalysisRequest {
            pair,
            region1_observations: self.region1_observations,
            region2_observations: self.region2_observations,
            weight_overrides: self.weight_overrides,
            statement: self.statement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_thresholds() {
        let cli = Cli::parse_from([
            "macro-sniper",
            "req.json",
            "--buy-threshold",
            "30",
            "--sell-threshold",
            "-25",
            "--sentiment-fallback",
        ]);
        let config = cli.analysis_config();
        assert_eq!(config.decision.buy, 30.0);
        assert_eq!(config.decision.sell, -25.0);
        assert_eq!(
            config.sentiment.failure_policy,
            SentimentFailurePolicy::TreatAsEmpty
        );
        assert_eq!(config.duration, ANALYSIS.duration);
    }

    #[test]
    fn cli_defaults_match_built_in_config() {
        let cli = Cli::parse_from(["macro-sniper"]);
        assert_eq!(cli.analysis_config(), ANALYSIS);
        assert!(cli.request.is_none());
    }

    #[test]
    fn request_file_parses_minimal_json() {
        let json = r#"{
            "region1_observations": [
                { "indicator": "Taux d'intérêt", "previous": 4.0, "forecast": 4.0, "actual": 4.25 }
            ],
            "statement": "Solid growth"
        }"#;
        let file: RequestFile = serde_json::from_str(json).unwrap();
        let request = file.into_request(None).unwrap();
        assert_eq!(request.pair.name, config::DEFAULT_PAIR_NAME);
        assert_eq!(request.region1_observations.len(), 1);
        assert!(request.region2_observations.is_empty());
        assert!(request.weight_overrides.is_empty());
    }

    #[test]
    fn pair_argument_wins_over_file() {
        let file = RequestFile {
            pair: Some("EUR/USD".to_string()),
            ..Default::default()
        };
        let request = file.into_request(Some("usd/cad")).unwrap();
        assert_eq!(request.pair.name, "USD/CAD");
        assert_eq!(request.pair.region2, "Canada");
    }

    #[test]
    fn pair_without_separator_is_malformed() {
        let err = RequestFile::default().into_request(Some("EURUSD")).unwrap_err();
        assert!(err.to_string().contains("expected BASE/QUOTE"));
    }

    #[test]
    fn unknown_pair_is_an_error() {
        let file = RequestFile {
            pair: Some("DOGE/EUR".to_string()),
            ..Default::default()
        };
        let err = file.into_request(None).unwrap_err();
        assert!(err.to_string().contains("DOGE/EUR"));
    }
}
