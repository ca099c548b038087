//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS)), RS = mean gain / mean loss over the period.
//! Saturates at 100 when the rolling loss is zero.

/// Rolling RSI aligned 1:1 with `closes`.
///
/// An entry is `None` until `period` price deltas are available.
pub fn rolling_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if closes.len() < 2 {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    // Delta i covers the move into bar i+1, so bar i has deltas 0..i.
    for bar in period..closes.len() {
        let start = bar - period;
        let avg_gain: f64 = gains[start..bar].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[start..bar].iter().sum::<f64>() / period as f64;

        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        out[bar] = Some(rsi);
    }
    out
}
