//! Per-request min-max scaling of the close-price column

/// Scales values into `[0, 1]` using bounds fit on one request's series.
///
/// Bounds are request-local by design: each prediction fits its own scaler
/// rather than sharing a global one.
#[derive(Debug, Clone, Copy)]
pub struct MinMaxScaler {
    min: f64,
    range: f64,
}

impl MinMaxScaler {
    /// Fit bounds on `values`. Returns `None` for an empty slice.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let (min, max) = crate::common::math::min_max(values)?;
        Some(Self {
            min,
            range: max - min,
        })
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.scale(v)).collect()
    }

    pub fn scale(&self, value: f64) -> f64 {
        if self.range == 0.0 {
            // Degenerate constant series: every value maps to the low bound.
            0.0
        } else {
            (value - self.min) / self.range
        }
    }

    pub fn inverse(&self, scaled: f64) -> f64 {
        self.min + scaled * self.range
    }
}
