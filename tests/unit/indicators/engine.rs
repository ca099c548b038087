//! Unit tests for the indicator engine

use chrono::NaiveDate;
use stockcast::indicators::annotate;
use stockcast::models::{PriceBar, PriceSeries};

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(
                start + chrono::Duration::days(i as i64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000,
            )
        })
        .collect();
    PriceSeries::new("TEST", bars)
}

#[test]
fn all_columns_align_with_the_series() {
    let closes: Vec<f64> = (0..100).map(|i| 150.0 + (i as f64 * 0.3).sin()).collect();
    let series = series_from_closes(&closes);
    let set = annotate(&series);

    assert_eq!(set.ma10.len(), 100);
    assert_eq!(set.ma20.len(), 100);
    assert_eq!(set.ma50.len(), 100);
    assert_eq!(set.rsi14.len(), 100);
    assert_eq!(set.macd.len(), 100);
}

#[test]
fn no_column_contains_nan() {
    let closes: Vec<f64> = (0..30).map(|i| 90.0 + i as f64).collect();
    let set = annotate(&series_from_closes(&closes));
    for column in [&set.ma10, &set.ma20, &set.ma50, &set.rsi14, &set.macd] {
        assert!(column.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn rsi_warmup_uses_neutral_default() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    let set = annotate(&series_from_closes(&closes));
    // Fewer bars than the RSI period: no real value ever exists.
    assert!(set.rsi14.iter().all(|&v| v == 50.0));
}

#[test]
fn neutral_default_never_overwrites_a_computed_value() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let set = annotate(&series_from_closes(&closes));
    // Monotonic rise: every defined RSI is 100, and stays 100 after filling.
    for &value in &set.rsi14[14..] {
        assert_eq!(value, 100.0);
    }
}

#[test]
fn moving_average_matches_rolling_mean_once_window_is_full() {
    let closes: Vec<f64> = (0..25).map(|i| 10.0 * (i + 1) as f64).collect();
    let set = annotate(&series_from_closes(&closes));

    let expected: f64 = closes[15..25].iter().sum::<f64>() / 10.0;
    assert!((set.ma10[24] - expected).abs() < 1e-9);
}

#[test]
fn moving_average_warmup_is_the_expanding_mean() {
    let closes = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let set = annotate(&series_from_closes(&closes));
    assert!((set.ma10[0] - 10.0).abs() < 1e-9);
    assert!((set.ma10[2] - 20.0).abs() < 1e-9);
    assert!((set.ma10[4] - 30.0).abs() < 1e-9);
}

#[test]
fn latest_accessors_fall_back_to_neutral_on_empty_sets() {
    let set = annotate(&PriceSeries::new("EMPTY", vec![]));
    assert_eq!(set.latest_rsi(), 50.0);
    assert_eq!(set.latest_macd(), 0.0);
}
