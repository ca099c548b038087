//! Unit tests for shared math helpers

use stockcast::common::math::{ema_series, mean, min_max};

#[test]
fn mean_of_empty_slice_is_none() {
    assert!(mean(&[]).is_none());
}

#[test]
fn mean_of_values() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn ema_series_is_seeded_by_first_value() {
    let values = [10.0, 11.0, 12.0];
    let ema = ema_series(&values, 12);
    assert_eq!(ema.len(), 3);
    assert_eq!(ema[0], 10.0);
    // Smoothing 2/13: each step moves a fraction of the gap.
    let alpha = 2.0 / 13.0;
    assert!((ema[1] - (11.0 * alpha + 10.0 * (1.0 - alpha))).abs() < 1e-12);
}

#[test]
fn ema_series_of_empty_input_is_empty() {
    assert!(ema_series(&[], 12).is_empty());
}

#[test]
fn min_max_finds_bounds() {
    assert_eq!(min_max(&[3.0, 1.0, 2.0]), Some((1.0, 3.0)));
    assert!(min_max(&[]).is_none());
}
