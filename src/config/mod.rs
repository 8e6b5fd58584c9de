//! Configuration module for the macro-sniper engine.

pub mod analysis;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod indicators;
pub mod pairs;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, AnalysisConfig, DecisionThresholds, DurationSettings, SentimentFailurePolicy,
    SentimentSettings,
};
pub use indicators::{BUILTIN_INDICATORS, MAX_WEIGHT, MIN_WEIGHT};
pub use pairs::{DEFAULT_PAIR_NAME, DEFAULT_PAIRS, PAIR_SEPARATOR};
