//! Shared data models spanning the pipeline layers.

pub mod bar;
pub mod indicators;
pub mod prediction;
pub mod profile;

pub use bar::{PriceBar, PriceSeries};
pub use indicators::IndicatorSet;
pub use prediction::{FetchOutcome, PredictionResult};
pub use profile::TickerProfile;
