//! Derives the full indicator set for a price series

use crate::indicators::macd::macd_series_default;
use crate::indicators::moving_average::{expanding_mean, rolling_ma};
use crate::indicators::rsi::rolling_rsi;
use crate::models::{IndicatorSet, PriceSeries};

const RSI_PERIOD: usize = 14;
const RSI_NEUTRAL: f64 = 50.0;

/// Compute MA10/MA20/MA50, RSI(14) and MACD(12, 26) columns aligned 1:1
/// with the series' bars. The input series is left untouched.
///
/// Warm-up gaps are forward-filled from the nearest prior defined value;
/// where none exists yet, RSI falls back to the neutral 50 and moving
/// averages to the expanding mean of the closes seen so far. MACD is
/// defined from the first bar and needs no filling.
pub fn annotate(series: &PriceSeries) -> IndicatorSet {
    let closes = series.closes();

    IndicatorSet {
        ma10: fill_ma(rolling_ma(&closes, 10), &closes),
        ma20: fill_ma(rolling_ma(&closes, 20), &closes),
        ma50: fill_ma(rolling_ma(&closes, 50), &closes),
        rsi14: forward_fill(rolling_rsi(&closes, RSI_PERIOD), RSI_NEUTRAL),
        macd: macd_series_default(&closes),
    }
}

/// Replace leading `None`s of a rolling MA with the expanding mean, leaving
/// every computed value untouched. Rolling windows have no gaps after the
/// warm-up, so no interior filling is needed.
fn fill_ma(column: Vec<Option<f64>>, closes: &[f64]) -> Vec<f64> {
    let warmup = expanding_mean(closes);
    column
        .into_iter()
        .enumerate()
        .map(|(i, v)| v.unwrap_or(warmup[i]))
        .collect()
}

/// Carry the most recent defined value forward; entries before the first
/// defined value take `neutral`.
fn forward_fill(column: Vec<Option<f64>>, neutral: f64) -> Vec<f64> {
    let mut last = None;
    column
        .into_iter()
        .map(|v| {
            if let Some(value) = v {
                last = Some(value);
                value
            } else {
                last.unwrap_or(neutral)
            }
        })
        .collect()
}
