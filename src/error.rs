//! Error taxonomy for the data acquisition and prediction pipeline

use thiserror::Error;

/// Failures raised while acquiring market data.
///
/// Only `InvalidTicker` ever reaches the orchestrator; everything else is
/// recovered inside the fetcher by retrying or falling back to synthesis.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid ticker symbol: {0:?}")]
    InvalidTicker(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("data source returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

/// Retry classification for a fetch failure.
///
/// Classification inspects the rendered error text, mirroring how upstream
/// vendors bury rate-limit signals in message bodies rather than structured
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    RateLimited,
    Network,
    Other,
}

impl ErrorClass {
    pub fn classify(err: &FetchError) -> Self {
        let text = err.to_string().to_lowercase();
        if text.contains("429") || text.contains("too many requests") || text.contains("rate limit")
        {
            ErrorClass::RateLimited
        } else if text.contains("timeout")
            || text.contains("timed out")
            || text.contains("connect")
            || text.contains("network")
        {
            ErrorClass::Network
        } else {
            ErrorClass::Other
        }
    }
}

/// Failures surfaced to the caller of `predict` as a `success: false` result.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("not enough data: need at least {need} bars, got {got}")]
    InsufficientData { need: usize, got: usize },

    #[error("forecasting capability error: {0}")]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors from the forecasting capability (training or inference).
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("model has not been fitted")]
    NotFitted,

    #[error("empty input window")]
    EmptyWindow,

    #[error("failed to write model artifact: {0}")]
    ArtifactWrite(String),
}
