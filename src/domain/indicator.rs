use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{BUILTIN_INDICATORS, MAX_WEIGHT, MIN_WEIGHT};
use crate::error::AnalysisError;

/// Per-session weight overrides, keyed by indicator name.
/// A BTreeMap keeps validation (and its first reported error) deterministic.
pub type WeightOverrides = BTreeMap<String, f64>;

/// Which way a release above forecast usually moves the region's currency
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum TypicalEffect {
    #[default]
    Bullish, // beat => stronger
    Bearish, // beat => weaker (e.g. unemployment)
    Neutral, // never scored
}

impl TypicalEffect {
    /// Short arrow used in tables
    pub fn symbol(&self) -> &'static str {
        match self {
            TypicalEffect::Bullish => "🔼",
            TypicalEffect::Bearish => "🔽",
            TypicalEffect::Neutral => "➖",
        }
    }
}

impl fmt::Display for TypicalEffect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypicalEffect::Bullish => write!(f, "Bullish"),
            TypicalEffect::Bearish => write!(f, "Bearish"),
            TypicalEffect::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    /// Importance in [0, 100]
    pub weight: f64,
    pub typical_effect: TypicalEffect,
}

impl Indicator {
    pub fn new(name: impl Into<String>, weight: f64, typical_effect: TypicalEffect) -> Self {
        Self {
            name: name.into(),
            weight,
            typical_effect,
        }
    }
}

/// The ordered set of indicators in use for one analysis run.
///
/// Built fresh for every request from the built-in table, so overrides from one
/// session can never leak into another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorCatalog {
    indicators: Vec<Indicator>,
}

impl IndicatorCatalog {
    /// Built-in indicators with their default weights
    pub fn builtin() -> Self {
        let indicators = BUILTIN_INDICATORS
            .iter()
            .map(|&(name, weight, effect)| Indicator::new(name, weight, effect))
            .collect();
        Self { indicators }
    }

    /// Built-in indicators with `overrides` applied to their weights.
    /// Typical effects are never overridable.
    pub fn with_overrides(overrides: &WeightOverrides) -> Result<Self, AnalysisError> {
        let mut catalog = Self::builtin();

        for (name, &weight) in overrides {
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                return Err(AnalysisError::InvalidWeight {
                    name: name.clone(),
                    weight,
                });
            }
            let indicator = catalog
                .indicators
                .iter_mut()
                .find(|ind| &ind.name == name)
                .ok_or_else(|| AnalysisError::MissingIndicator {
                    name: name.clone(),
                    region: None,
                })?;
            indicator.weight = weight;
        }

        Ok(catalog)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Indicator> {
        self.indicators.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|ind| ind.name == name)
    }

    /// Index of `name` in catalog order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.indicators.iter().position(|ind| ind.name == name)
    }

    pub(crate) fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn into_indicators(self) -> Vec<Indicator> {
        self.indicators
    }
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a IndicatorCatalog {
    type Item = &'a Indicator;
    type IntoIter = std::slice::Iter<'a, Indicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.indicators.iter()
    }
}

/// Fresh ordered catalog for one run, with `overrides` applied
pub fn catalog_with_overrides(overrides: &WeightOverrides) -> Result<Vec<Indicator>, AnalysisError> {
    IndicatorCatalog::with_overrides(overrides).map(IndicatorCatalog::into_indicators)
}
