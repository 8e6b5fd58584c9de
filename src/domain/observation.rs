use serde::{Deserialize, Serialize};

/// One release for one indicator in one region.
/// `previous` is carried for display only and never enters the score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub indicator: String,
    #[serde(default)]
    pub previous: f64,
    #[serde(default)]
    pub forecast: f64,
    #[serde(default)]
    pub actual: f64,
}

impl Observation {
    pub fn new(indicator: impl Into<String>, previous: f64, forecast: f64, actual: f64) -> Self {
        Self {
            indicator: indicator.into(),
            previous,
            forecast,
            actual,
        }
    }

    /// Row for an indicator nobody filled in
    pub fn blank(indicator: impl Into<String>) -> Self {
        Self::new(indicator, 0.0, 0.0, 0.0)
    }

    /// Absolute surprise against the forecast
    pub fn deviation(&self) -> f64 {
        (self.actual - self.forecast).abs()
    }
}
