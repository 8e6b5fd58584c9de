use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAIRS, PAIR_SEPARATOR};

/// A tradable pair and the two regions whose releases drive it.
/// Strength in `region1` pushes the pair up, strength in `region2` pushes it down.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
pub struct Pair {
    pub name: String,
    pub region1: String,
    pub region2: String,
}

impl Pair {
    pub fn new(
        name: impl Into<String>,
        region1: impl Into<String>,
        region2: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region1: region1.into(),
            region2: region2.into(),
        }
    }

    /// Look up one of the built-in pairs. Case-insensitive on the pair name.
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = name.trim();
        DEFAULT_PAIRS
            .iter()
            .find(|(pair, _, _)| pair.eq_ignore_ascii_case(wanted))
            .map(|&(pair, r1, r2)| Self::new(pair, r1, r2))
    }

    /// All built-in pairs, in menu order
    pub fn builtin() -> Vec<Self> {
        DEFAULT_PAIRS
            .iter()
            .map(|&(pair, r1, r2)| Self::new(pair, r1, r2))
            .collect()
    }

    // "EUR/USD" -> Some(("EUR", "USD")). None if there is no separator or a side is empty.
    pub fn get_base_and_quote(text: &str) -> Option<(&str, &str)> {
        let (base, quote) = text.split_once(PAIR_SEPARATOR)?;
        let (base, quote) = (base.trim(), quote.trim());
        if base.is_empty() || quote.is_empty() {
            return None;
        }
        Some((base, quote))
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({} vs {})", self.name, self.region1, self.region2)
    }
}
