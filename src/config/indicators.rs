//! Built-in indicator table.
//!
//! Order matters: it is the canonical display order of every per-region table
//! and of the chart grouping, so new entries go where they should be shown.

use crate::domain::TypicalEffect;

/// (name, default weight in [0, 100], typical effect of a beat).
/// Every built-in indicator reads a beat as strength for its region; Bearish and
/// Neutral are available to hand-built catalogs.
pub const BUILTIN_INDICATORS: &[(&str, f64, TypicalEffect)] = &[
    ("Taux d'intérêt", 100.0, TypicalEffect::Bullish),
    ("Décision de politique monétaire", 75.0, TypicalEffect::Bullish),
    ("Discours banques centrales", 50.0, TypicalEffect::Bullish),
    ("Inflation (CPI, Core CPI, PCE)", 50.0, TypicalEffect::Bullish),
    ("Création d'emplois", 40.0, TypicalEffect::Bullish),
    ("PIB (croissance)", 35.0, TypicalEffect::Bullish),
    ("Chômage", 30.0, TypicalEffect::Bullish),
    ("Balance commerciale", 20.0, TypicalEffect::Bullish),
    ("PMI (ISM, Markit)", 15.0, TypicalEffect::Bullish),
    ("Ventes au détail", 15.0, TypicalEffect::Bullish),
    ("PPI (indice des prix à la production)", 12.5, TypicalEffect::Bullish),
    ("Confiance du consommateur", 10.0, TypicalEffect::Bullish),
    ("Confiance des entreprises", 10.0, TypicalEffect::Bullish),
    ("Production industrielle", 10.0, TypicalEffect::Bullish),
    ("Commandes de biens durables", 7.5, TypicalEffect::Bullish),
    ("Indicateurs immobiliers", 7.5, TypicalEffect::Bullish),
    ("Stocks de pétrole / énergie", 7.5, TypicalEffect::Bullish),
    ("Sentiment du marché / volatilité (VIX)", 5.0, TypicalEffect::Bullish),
    ("Rumeurs géopolitiques / tensions", 5.0, TypicalEffect::Bullish),
    ("Indice de coût de la main-d'œuvre (ECI)", 2.5, TypicalEffect::Bullish),
];

/// Accepted range for any indicator weight, default or override
pub const MIN_WEIGHT: f64 = 0.0;
pub const MAX_WEIGHT: f64 = 100.0;
