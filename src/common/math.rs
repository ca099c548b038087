//! Shared math helpers for rolling and exponential statistics

/// Simple mean of a slice. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// One EMA step with smoothing factor `2 / (span + 1)`.
pub fn ema_step(value: f64, previous: f64, span: usize) -> f64 {
    let alpha = 2.0 / (span as f64 + 1.0);
    value * alpha + previous * (1.0 - alpha)
}

/// Full exponential moving average series, seeded by the first value
/// (no bias adjustment). Output is aligned 1:1 with the input.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous = match values.first() {
        Some(&v) => v,
        None => return out,
    };
    out.push(previous);
    for &value in &values[1..] {
        previous = ema_step(value, previous, span);
        out.push(previous);
    }
    out
}

/// Min and max of a slice. Returns `None` for empty input.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}
