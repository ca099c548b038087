//! Simple moving averages over the close-price column

/// Rolling simple moving average of `closes` over a trailing `window`.
///
/// The output is aligned 1:1 with the input. Entries before the window is
/// full are `None`; the engine decides how warm-up gaps are filled.
pub fn rolling_ma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(closes.len());
    let mut sum = 0.0;

    for i in 0..closes.len() {
        sum += closes[i];
        if i >= window {
            sum -= closes[i - window];
        }
        if i + 1 >= window {
            out.push(Some(sum / window as f64));
        } else {
            out.push(None);
        }
    }
    out
}

/// Expanding mean of `closes`, defined from the first bar onward.
pub fn expanding_mean(closes: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(closes.len());
    let mut sum = 0.0;
    for (i, &close) in closes.iter().enumerate() {
        sum += close;
        out.push(sum / (i + 1) as f64);
    }
    out
}
