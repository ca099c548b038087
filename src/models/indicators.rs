use serde::{Deserialize, Serialize};

/// Technical indicator columns aligned 1:1 with the bars of a price series.
///
/// Every column is fully defined: warm-up gaps are forward-filled from the
/// nearest prior value, with neutral defaults (RSI 50, MACD 0) where no
/// prior value exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ma10: Vec<f64>,
    pub ma20: Vec<f64>,
    pub ma50: Vec<f64>,
    pub rsi14: Vec<f64>,
    pub macd: Vec<f64>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }

    pub fn latest_rsi(&self) -> f64 {
        self.rsi14.last().copied().unwrap_or(50.0)
    }

    pub fn latest_macd(&self) -> f64 {
        self.macd.last().copied().unwrap_or(0.0)
    }
}
