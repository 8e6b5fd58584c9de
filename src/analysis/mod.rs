// Scoring engine: indicator surprises, statement sentiment, and the final call
pub mod decision;
pub mod indicator_scoring;
pub mod lexicon;
pub mod pair_analysis;
pub mod sentiment;

// Re-export commonly used types
pub use decision::{classify, combine, estimate_duration};
pub use indicator_scoring::{aggregate, score};
pub use lexicon::LexiconPolarity;
pub use pair_analysis::{AnalysisRequest, PairAnalyzer, analyze};
pub use sentiment::{TextPolarityProvider, analyze_sentiment, label_for};
