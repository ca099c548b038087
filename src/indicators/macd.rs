//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(close, fast) - EMA(close, slow), both EMAs seeded by the
//! first close with smoothing 2/(span+1) and no bias adjustment, so the
//! column is defined from the first bar.

use crate::common::math::ema_series;

/// MACD line aligned 1:1 with `closes`.
pub fn macd_series(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast_ema = ema_series(closes, fast);
    let slow_ema = ema_series(closes, slow);
    fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect()
}

/// MACD with the conventional (12, 26) spans.
pub fn macd_series_default(closes: &[f64]) -> Vec<f64> {
    macd_series(closes, 12, 26)
}
