//! Word-list polarity provider for English and French statements.
//!
//! Each known word carries a polarity in [-1, 1]. A preceding intensifier scales
//! it, a negation within the two previous words flips and halves it, and the
//! statement polarity is the mean over all hits. No hit means 0.

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::error::SentimentProviderError;

use super::sentiment::TextPolarityProvider;

/// How far back (in words) a negation still applies
const NEGATION_REACH: usize = 2;
/// Multiplier applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarity;

impl LexiconPolarity {
    pub fn new() -> Self {
        Self
    }

    /// Polarity of the statement, always in [-1, 1]
    pub fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut hits: Vec<f64> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = word_polarity(token) else {
                continue;
            };

            let mut value = base;
            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| intensifier(&tokens[prev]))
            {
                value *= factor;
            }

            let window_start = i.saturating_sub(NEGATION_REACH);
            if tokens[window_start..i].iter().any(|t| is_negation(t)) {
                value *= NEGATION_FACTOR;
            }

            let value = value.clamp(-1.0, 1.0);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_lexicon_hits {
                log::info!("[lexicon] {:<16} {:+.2} -> {:+.2}", token, base, value);
            }

            hits.push(value);
        }

        if hits.is_empty() {
            return 0.0;
        }
        let mean = hits.iter().sum::<f64>() / hits.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl TextPolarityProvider for LexiconPolarity {
    fn polarity(&self, text: &str) -> Result<f64, SentimentProviderError> {
        Ok(self.score(text))
    }
}

// Lowercase words. "isn't" becomes "is not"; French elisions ("l'économie", "n'est")
// split on the apostrophe so "n" is kept as a negation marker.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace("n't", " not")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_negation(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "without" | "nor" | "n" | "ne" | "pas" | "jamais" | "sans"
            | "aucun" | "aucune" | "ni"
    )
}

fn intensifier(word: &str) -> Option<f64> {
    let factor = match word {
        "very" | "highly" | "très" | "fortement" => 1.3,
        "extremely" | "extrêmement" => 1.5,
        "really" | "particularly" | "particulièrement" | "vraiment" => 1.2,
        "slightly" | "somewhat" | "légèrement" | "peu" => 0.5,
        _ => return None,
    };
    Some(factor)
}

fn word_polarity(word: &str) -> Option<f64> {
    let polarity = match word {
        // English, bullish tone
        "excellent" | "outstanding" => 1.0,
        "great" => 0.8,
        "good" => 0.7,
        "optimistic" => 0.6,
        "strong" | "robust" | "resilient" | "healthy" | "confident" | "hawkish" => 0.5,
        "positive" | "positif" => 0.5,
        "solid" | "improving" | "improved" | "recovery" | "boost" | "hike" => 0.4,
        "growth" | "expansion" | "stable" | "tightening" | "tighten" | "accelerate" => 0.3,
        // English, bearish tone
        "terrible" | "disastrous" => -1.0,
        "crisis" => -0.8,
        "bad" | "recession" => -0.7,
        "pessimistic" | "worse" => -0.6,
        "weak" | "weakness" | "contraction" | "deteriorating" | "dovish" | "negative" => -0.5,
        "poor" | "slowdown" | "decline" | "declining" | "fragile" => -0.4,
        "uncertain" | "uncertainty" | "concern" | "concerns" | "cut" | "cuts" | "easing" => -0.3,
        "risk" | "risks" => -0.2,
        // French, bullish tone
        "excellente" => 1.0,
        "bon" | "bonne" => 0.7,
        "optimiste" => 0.6,
        "fort" | "forte" | "robuste" | "confiant" | "confiante" | "dynamique" => 0.5,
        "positifs" | "positives" => 0.5,
        "solide" | "amélioration" | "reprise" => 0.4,
        "croissance" | "hausse" | "resserrement" => 0.3,
        // French, bearish tone
        "catastrophique" => -1.0,
        "crise" => -0.8,
        "mauvais" | "mauvaise" | "récession" => -0.7,
        "pessimiste" => -0.6,
        "faible" | "faiblesse" | "dégradation" | "négatif" | "négative" => -0.5,
        "ralentissement" | "déclin" => -0.4,
        "incertain" | "incertitude" | "inquiétude" | "assouplissement" | "baisse" => -0.3,
        "risque" | "risques" => -0.2,
        _ => return None,
    };
    Some(polarity)
}
