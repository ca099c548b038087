//! Unit tests for the RSI indicator

use stockcast::indicators::rolling_rsi;

#[test]
fn rsi_undefined_until_period_deltas_exist() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let rsi = rolling_rsi(&closes, 14);
    assert_eq!(rsi.len(), closes.len());
    for value in &rsi[..14] {
        assert!(value.is_none());
    }
    assert!(rsi[14].is_some());
}

#[test]
fn rsi_saturates_at_100_when_losses_are_zero() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let rsi = rolling_rsi(&closes, 14);
    assert_eq!(rsi[19], Some(100.0));
}

#[test]
fn rsi_is_zero_for_monotonic_decline() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let rsi = rolling_rsi(&closes, 14);
    assert_eq!(rsi[19], Some(0.0));
}

#[test]
fn rsi_stays_within_bounds_on_mixed_data() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 15.0 + (i % 7) as f64)
        .collect();
    for value in rolling_rsi(&closes, 14).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value), "RSI out of range: {value}");
    }
}

#[test]
fn rsi_of_flat_series_saturates() {
    // No gains and no losses: the zero-loss branch applies.
    let closes = vec![100.0; 20];
    let rsi = rolling_rsi(&closes, 14);
    assert_eq!(rsi[19], Some(100.0));
}
