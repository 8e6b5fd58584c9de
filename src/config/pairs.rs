//! Tradable pairs offered by default, each with the two regions it opposes.
//!
//! The first region is the base of the pair: strength there pushes the pair up.

/// (pair name, region 1, region 2)
pub const DEFAULT_PAIRS: &[(&str, &str, &str)] = &[
    ("EUR/USD", "Zone euro", "États-Unis"),
    ("GBP/USD", "Royaume-Uni", "États-Unis"),
    ("USD/JPY", "États-Unis", "Japon"),
    ("USD/CAD", "États-Unis", "Canada"),
    ("USD/CHF", "États-Unis", "Suisse"),
    ("AUD/USD", "Australie", "États-Unis"),
    ("NZD/USD", "Nouvelle-Zélande", "États-Unis"),
    ("XAU/USD", "Or", "États-Unis"),
    ("BTC/USD", "Bitcoin", "États-Unis"),
    ("AAPL/USD", "Apple", "États-Unis"),
    ("ETH/USD", "Ethereum", "États-Unis"),
];

/// Pair used by the CLI when a request names none
pub const DEFAULT_PAIR_NAME: &str = "EUR/USD";

/// Separator between base and quote in a pair name
pub const PAIR_SEPARATOR: char = '/';
