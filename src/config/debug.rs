//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per scored indicator (region, name, deviation, score).
    pub print_indicator_scores: bool,
    /// If non-empty, emit per-indicator output only for this region.
    /// Example: "Zone euro". Use "" for every region.
    pub print_scores_for_region: &'static str,
    /// Emit the polarity and label computed for the statement.
    pub print_sentiment_details: bool,
    /// Emit the per-word hits of the lexicon polarity provider.
    pub print_lexicon_hits: bool,
    /// Emit progress while a batch of analyses is running.
    pub print_batch_progress: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_indicator_scores: false,
    print_scores_for_region: "",
    print_sentiment_details: false,
    print_lexicon_hits: false,
    print_batch_progress: false,
};
