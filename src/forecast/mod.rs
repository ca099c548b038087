//! Forecasting capability seam
//!
//! The pipeline consumes the model through the `Forecaster` trait only.
//! The shipped implementation is an exponential-smoothing model whose
//! smoothing factor is picked by grid search over the training series; the
//! fitted parameters persist as a small JSON artifact so later runs skip
//! training.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ForecastError;

/// Opaque forecasting capability: fit once on a scaled close series,
/// predict the next scaled close from a trailing window.
pub trait Forecaster: Send + Sync {
    fn is_fitted(&self) -> bool;

    /// Train on a full scaled close-price series.
    fn fit(&mut self, closes: &[f64]) -> Result<(), ForecastError>;

    /// Predict the next value from a trailing window of scaled closes.
    fn predict(&self, window: &[f64]) -> Result<f64, ForecastError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SmoothingParams {
    alpha: f64,
    drift: f64,
    trained_at: DateTime<Utc>,
}

/// Exponential-smoothing forecaster with a JSON model artifact.
///
/// Training selects the smoothing factor minimizing one-step-ahead squared
/// error on the training series and estimates the mean one-step drift.
/// Prediction smooths the input window to a level and adds the drift.
pub struct SmoothingForecaster {
    params: Option<SmoothingParams>,
    artifact_path: PathBuf,
}

impl SmoothingForecaster {
    /// Open the forecaster, loading the artifact at `path` if one exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let artifact_path = path.into();
        let params = load_artifact(&artifact_path);
        if params.is_some() {
            info!(path = %artifact_path.display(), "loaded existing model artifact");
        }
        Self {
            params,
            artifact_path,
        }
    }

    fn smoothed_level(window: &[f64], alpha: f64) -> f64 {
        let mut level = window[0];
        for &value in &window[1..] {
            level = alpha * value + (1.0 - alpha) * level;
        }
        level
    }

    /// Sum of squared one-step-ahead errors for a candidate alpha.
    fn one_step_error(closes: &[f64], alpha: f64) -> f64 {
        let mut level = closes[0];
        let mut error = 0.0;
        for &value in &closes[1..] {
            let residual = value - level;
            error += residual * residual;
            level = alpha * value + (1.0 - alpha) * level;
        }
        error
    }
}

impl Forecaster for SmoothingForecaster {
    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(&mut self, closes: &[f64]) -> Result<(), ForecastError> {
        if closes.len() < 2 {
            return Err(ForecastError::EmptyWindow);
        }

        let mut best_alpha = 0.5;
        let mut best_error = f64::INFINITY;
        for step in 1..20 {
            let alpha = step as f64 * 0.05;
            let error = Self::one_step_error(closes, alpha);
            if error < best_error {
                best_error = error;
                best_alpha = alpha;
            }
        }

        let drift = closes
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .sum::<f64>()
            / (closes.len() - 1) as f64;

        let params = SmoothingParams {
            alpha: best_alpha,
            drift,
            trained_at: Utc::now(),
        };
        save_artifact(&self.artifact_path, &params)?;
        info!(
            alpha = params.alpha,
            drift = params.drift,
            path = %self.artifact_path.display(),
            "fitted and saved model"
        );
        self.params = Some(params);
        Ok(())
    }

    fn predict(&self, window: &[f64]) -> Result<f64, ForecastError> {
        let params = self.params.as_ref().ok_or(ForecastError::NotFitted)?;
        if window.is_empty() {
            return Err(ForecastError::EmptyWindow);
        }
        Ok(Self::smoothed_level(window, params.alpha) + params.drift)
    }
}

fn load_artifact(path: &Path) -> Option<SmoothingParams> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn save_artifact(path: &Path, params: &SmoothingParams) -> Result<(), ForecastError> {
    let raw = serde_json::to_string_pretty(params)
        .map_err(|e| ForecastError::ArtifactWrite(e.to_string()))?;
    fs::write(path, raw).map_err(|e| ForecastError::ArtifactWrite(e.to_string()))
}
