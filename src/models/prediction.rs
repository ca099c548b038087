use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::models::bar::PriceSeries;

/// Result of a data acquisition attempt.
///
/// The fetcher always resolves to some series for a well-formed ticker;
/// `Synthetic` marks data produced by the generator rather than the source.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Real(PriceSeries),
    Synthetic(PriceSeries),
}

impl FetchOutcome {
    pub fn series(&self) -> &PriceSeries {
        match self {
            FetchOutcome::Real(s) | FetchOutcome::Synthetic(s) => s,
        }
    }

    pub fn into_series(self) -> (PriceSeries, bool) {
        match self {
            FetchOutcome::Real(s) => (s, true),
            FetchOutcome::Synthetic(s) => (s, false),
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, FetchOutcome::Real(_))
    }
}

/// Fixed-field contract returned for every prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub success: bool,
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_date: Option<String>,
    pub using_synthetic_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl PredictionResult {
    pub fn success(
        ticker: &str,
        current_price: f64,
        predicted_price: f64,
        explanation: String,
        using_synthetic_data: bool,
    ) -> Self {
        let price_change = predicted_price - current_price;
        let percent_change = price_change / current_price * 100.0;
        let prediction_date = (Utc::now() + Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();

        Self {
            success: true,
            ticker: ticker.to_uppercase(),
            current_price: Some(round2(current_price)),
            predicted_price: Some(round2(predicted_price)),
            price_change: Some(round2(price_change)),
            percent_change: Some(round2(percent_change)),
            explanation: Some(explanation),
            prediction_date: Some(prediction_date),
            using_synthetic_data,
            error: None,
        }
    }

    pub fn failure(ticker: &str, err: &PredictError) -> Self {
        Self {
            success: false,
            ticker: ticker.to_uppercase(),
            current_price: None,
            predicted_price: None,
            price_change: None,
            percent_change: None,
            explanation: None,
            prediction_date: None,
            using_synthetic_data: false,
            error: Some(err.to_string()),
        }
    }
}
