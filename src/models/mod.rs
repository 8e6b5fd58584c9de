// Result models and their presentation.
// Plain data: everything here is built by the analysis module and read by shells.

pub mod report;
pub mod results;

// Re-export key types for convenience
pub use report::{AnalysisReport, ChartRow, TableRow};
pub use results::{
    AnalysisResult, Decision, DurationLabel, IndicatorScore, RegionResult, ScoreTone,
    SentimentLabel, SentimentResult,
};
