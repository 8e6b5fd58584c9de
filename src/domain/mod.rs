// Domain types and value objects
pub mod indicator;
pub mod observation;
pub mod pair;

// Re-export commonly used types
pub use indicator::{
    Indicator, IndicatorCatalog, TypicalEffect, WeightOverrides, catalog_with_overrides,
};
pub use observation::Observation;
pub use pair::Pair;
