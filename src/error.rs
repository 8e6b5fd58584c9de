use std::fmt;

/// Failure reported by a text polarity provider.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentProviderError {
    /// The provider could not produce a polarity (backend down, timeout, bad reply...)
    Unavailable(String),
    /// The provider answered with a value outside [-1, 1] or a non-finite value
    OutOfRange { polarity: f64 },
}

impl std::error::Error for SentimentProviderError {}
impl fmt::Display for SentimentProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentProviderError::Unavailable(msg) => {
                write!(f, "polarity provider unavailable: {}", msg)
            }
            SentimentProviderError::OutOfRange { polarity } => {
                write!(f, "polarity provider returned {} (expected -1..=1)", polarity)
            }
        }
    }
}

/// Everything that aborts an analysis run.
///
/// None of these are retried or recovered inside the engine. The one exception is
/// a provider failure under `SentimentFailurePolicy::TreatAsEmpty`, which never
/// reaches this type.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// An observation or weight override names an indicator the catalog does not have
    MissingIndicator {
        name: String,
        region: Option<String>,
    },
    /// Override weight outside [0, 100]
    InvalidWeight { name: String, weight: f64 },
    /// Two observations for the same indicator in one region
    DuplicateObservation { name: String, region: String },
    /// Sell threshold above buy threshold
    InvalidThresholds { buy: f64, sell: f64 },
    SentimentProvider(SentimentProviderError),
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::SentimentProvider(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingIndicator { name, region } => match region {
                Some(region) => write!(f, "{}: unknown indicator '{}'", region, name),
                None => write!(f, "unknown indicator '{}' in weight overrides", name),
            },
            AnalysisError::InvalidWeight { name, weight } => write!(
                f,
                "weight {} for '{}' is outside the accepted range 0..=100",
                weight, name
            ),
            AnalysisError::DuplicateObservation { name, region } => {
                write!(f, "{}: indicator '{}' observed more than once", region, name)
            }
            AnalysisError::InvalidThresholds { buy, sell } => write!(
                f,
                "sell threshold {} is above buy threshold {}",
                sell, buy
            ),
            AnalysisError::SentimentProvider(e) => write!(f, "sentiment scoring failed: {}", e),
        }
    }
}

impl From<SentimentProviderError> for AnalysisError {
    fn from(e: SentimentProviderError) -> Self {
        AnalysisError::SentimentProvider(e)
    }
}
