//! Sequences one prediction request end to end

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::Config;
use crate::error::PredictError;
use crate::forecast::Forecaster;
use crate::indicators;
use crate::market::MarketDataFetcher;
use crate::metrics::Metrics;
use crate::models::PredictionResult;
use crate::pipeline::explanation::explain;
use crate::pipeline::scaler::MinMaxScaler;

/// Runs fetch → indicators → scaling → forecast → explanation and always
/// resolves to a structured `PredictionResult`; failures become
/// `success: false`, never a crash.
pub struct PredictionOrchestrator {
    fetcher: Arc<MarketDataFetcher>,
    forecaster: Arc<Mutex<dyn Forecaster>>,
    metrics: Option<Arc<Metrics>>,
    look_back: usize,
    days_back: u32,
}

impl PredictionOrchestrator {
    pub fn new(
        fetcher: Arc<MarketDataFetcher>,
        forecaster: Arc<Mutex<dyn Forecaster>>,
        metrics: Option<Arc<Metrics>>,
        config: &Config,
    ) -> Self {
        Self {
            fetcher,
            forecaster,
            metrics,
            look_back: config.look_back,
            days_back: config.days_back,
        }
    }

    pub async fn predict(&self, ticker: &str) -> PredictionResult {
        let result = match self.run(ticker).await {
            Ok(result) => result,
            Err(err) => {
                error!(ticker = %ticker, error = %err, "prediction failed");
                PredictionResult::failure(ticker, &err)
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.predictions_total.inc();
            if !result.success {
                metrics.predictions_failed_total.inc();
            }
            if result.using_synthetic_data {
                metrics.synthetic_fallbacks_total.inc();
            }
        }
        result
    }

    async fn run(&self, ticker: &str) -> Result<PredictionResult, PredictError> {
        let outcome = self.fetcher.fetch(ticker, self.days_back).await?;
        let (series, is_real) = outcome.into_series();
        let indicators = indicators::annotate(&series);

        if series.len() < self.look_back {
            return Err(PredictError::InsufficientData {
                need: self.look_back,
                got: series.len(),
            });
        }

        let closes = series.closes();
        let scaler = MinMaxScaler::fit(&closes).ok_or(PredictError::InsufficientData {
            need: self.look_back,
            got: 0,
        })?;
        let scaled = scaler.transform(&closes);
        let window = &scaled[scaled.len() - self.look_back..];

        let predicted_scaled = {
            let mut forecaster = self.forecaster.lock().await;
            if !forecaster.is_fitted() {
                forecaster.fit(&scaled)?;
            }
            forecaster.predict(window)?
        };
        let predicted_price = scaler.inverse(predicted_scaled);

        // The length check above guarantees a non-empty series.
        let current_price = closes[closes.len() - 1];
        let explanation = explain(
            current_price,
            predicted_price,
            indicators.latest_rsi(),
            indicators.latest_macd(),
            !is_real,
        );

        info!(
            ticker = %series.ticker,
            current_price,
            predicted_price,
            synthetic = !is_real,
            "prediction complete"
        );
        Ok(PredictionResult::success(
            &series.ticker,
            current_price,
            predicted_price,
            explanation,
            !is_real,
        ))
    }
}
