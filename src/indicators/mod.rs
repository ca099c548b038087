pub mod engine;
pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use engine::annotate;
pub use macd::macd_series;
pub use moving_average::rolling_ma;
pub use rsi::rolling_rsi;
