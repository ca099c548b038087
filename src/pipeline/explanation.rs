//! Rule-based narrative for a prediction

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;
const MAX_CONFIDENCE: f64 = 85.0;

/// Build the human-readable rationale from indicator thresholds and the
/// predicted move. Never fails; NaN indicator values fall back to neutral
/// before the rules run.
pub fn explain(
    current_price: f64,
    predicted_price: f64,
    latest_rsi: f64,
    latest_macd: f64,
    using_synthetic_data: bool,
) -> String {
    let rsi = if latest_rsi.is_nan() { 50.0 } else { latest_rsi };
    let macd = if latest_macd.is_nan() { 0.0 } else { latest_macd };

    let change_percent = (predicted_price - current_price) / current_price * 100.0;
    let direction = if change_percent > 0.0 {
        "bullish"
    } else {
        "bearish"
    };
    let confidence = (change_percent.abs() * 10.0).min(MAX_CONFIDENCE);

    let mut text = format!(
        "Based on time-series analysis of historical price patterns and technical indicators, \
         the model predicts a {} movement of {:.2}%. ",
        direction,
        change_percent.abs()
    );

    if rsi > RSI_OVERBOUGHT {
        text.push_str("RSI indicates overbought conditions. ");
    } else if rsi < RSI_OVERSOLD {
        text.push_str("RSI indicates oversold conditions. ");
    }

    if macd > 0.0 {
        text.push_str("MACD shows positive momentum. ");
    } else {
        text.push_str("MACD shows negative momentum. ");
    }

    text.push_str(&format!("Model confidence: {:.1}%. ", confidence));

    if using_synthetic_data {
        text.push_str("[Note: Using simulated data because the market data source is unavailable]");
    }

    text
}
