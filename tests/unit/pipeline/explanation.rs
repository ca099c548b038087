//! Unit tests for the rule-based explanation generator

use stockcast::pipeline::explain;

#[test]
fn bullish_overbought_with_positive_momentum() {
    let text = explain(100.0, 105.0, 75.0, 1.2, false);
    assert!(text.contains("bullish"));
    assert!(text.contains("overbought"));
    assert!(text.contains("positive momentum"));
    assert!(!text.contains("[Note:"));
}

#[test]
fn bearish_oversold_with_negative_momentum() {
    let text = explain(100.0, 95.0, 25.0, -0.8, false);
    assert!(text.contains("bearish"));
    assert!(text.contains("oversold"));
    assert!(text.contains("negative momentum"));
}

#[test]
fn neutral_rsi_adds_no_rsi_note() {
    let text = explain(100.0, 102.0, 50.0, 0.5, false);
    assert!(!text.contains("overbought"));
    assert!(!text.contains("oversold"));
}

#[test]
fn synthetic_data_adds_a_disclaimer() {
    let text = explain(100.0, 101.0, 50.0, 0.1, true);
    assert!(text.contains("[Note:"));
    assert!(text.contains("simulated data"));
}

#[test]
fn confidence_is_capped_at_85() {
    // A 100% predicted move would imply 1000% confidence uncapped.
    let text = explain(100.0, 200.0, 50.0, 0.5, false);
    assert!(text.contains("Model confidence: 85.0%"));
}

#[test]
fn confidence_scales_with_the_predicted_move() {
    let text = explain(100.0, 105.0, 50.0, 0.5, false);
    assert!(text.contains("Model confidence: 50.0%"));
}

#[test]
fn nan_indicators_fall_back_to_neutral() {
    let text = explain(100.0, 101.0, f64::NAN, f64::NAN, false);
    assert!(!text.contains("overbought"));
    assert!(!text.contains("oversold"));
    // Neutral MACD (0.0) is not strictly positive.
    assert!(text.contains("negative momentum"));
}
