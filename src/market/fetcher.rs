//! Orchestrates probe → rate limit → classified retry → synthetic fallback

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ErrorClass, FetchError};
use crate::market::rate_limiter::RateLimiter;
use crate::market::source::MarketDataSource;
use crate::market::synthetic::SyntheticSeriesGenerator;
use crate::models::{FetchOutcome, PriceSeries};

/// Fixed delay before the single retry granted to unclassified failures.
const OTHER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Exponential backoff with jitter for retry attempt `attempt` (>= 1):
/// `base * 2^attempt + uniform(0, jitter_ceiling)`.
pub fn backoff_delay(
    base: Duration,
    jitter_ceiling: Duration,
    attempt: u32,
    rng: &mut impl Rng,
) -> Duration {
    let exponential = base.as_secs_f64() * 2f64.powi(attempt as i32);
    let ceiling = jitter_ceiling.as_secs_f64();
    let jitter = if ceiling > 0.0 {
        rng.gen_range(0.0..ceiling)
    } else {
        0.0
    };
    Duration::from_secs_f64(exponential + jitter)
}

/// Acquires daily history for a ticker, degrading to synthetic data when
/// the source is unreachable, rate-limiting, or persistently failing.
///
/// For any well-formed ticker the fetch resolves to *some* series; only
/// parameter errors surface as `Err`.
pub struct MarketDataFetcher {
    source: Arc<dyn MarketDataSource>,
    limiter: Arc<RateLimiter>,
    generator: SyntheticSeriesGenerator,
    max_retries: u32,
    min_viable_days: usize,
    base_delay: Duration,
    jitter_ceiling: Duration,
    rng: Mutex<StdRng>,
}

impl MarketDataFetcher {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        limiter: Arc<RateLimiter>,
        generator: SyntheticSeriesGenerator,
        config: &Config,
    ) -> Self {
        Self {
            source,
            limiter,
            generator,
            max_retries: config.max_retries,
            min_viable_days: config.min_viable_days,
            base_delay: config.base_delay,
            jitter_ceiling: config.jitter_ceiling,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fetch `days_back` calendar days of history for `ticker`.
    pub async fn fetch(&self, ticker: &str, days_back: u32) -> Result<FetchOutcome, FetchError> {
        let ticker = normalize_ticker(ticker)?;

        if !self.source.is_reachable().await {
            info!(ticker = %ticker, "data source unreachable, generating synthetic series");
            return Ok(FetchOutcome::Synthetic(
                self.generator.generate(&ticker, days_back),
            ));
        }

        self.limiter.acquire().await;

        match self.fetch_with_retries(&ticker, days_back).await {
            Some(series) => Ok(FetchOutcome::Real(series)),
            None => {
                warn!(ticker = %ticker, "all fetch attempts exhausted, falling back to synthetic data");
                Ok(FetchOutcome::Synthetic(
                    self.generator.generate(&ticker, days_back),
                ))
            }
        }
    }

    async fn fetch_with_retries(&self, ticker: &str, days_back: u32) -> Option<PriceSeries> {
        let mut other_retry_used = false;

        for attempt in 0..self.max_retries {
            match self.source.daily_history(ticker, days_back).await {
                Ok(bars) if bars.len() >= self.min_viable_days => {
                    info!(ticker = %ticker, rows = bars.len(), attempt, "fetched real data");
                    return Some(PriceSeries::new(ticker, bars));
                }
                Ok(bars) => {
                    warn!(
                        ticker = %ticker,
                        rows = bars.len(),
                        need = self.min_viable_days,
                        attempt,
                        "response below viable threshold"
                    );
                    self.backoff(attempt + 1).await;
                }
                Err(err) => {
                    let class = ErrorClass::classify(&err);
                    warn!(ticker = %ticker, error = %err, ?class, attempt, "fetch attempt failed");
                    match class {
                        ErrorClass::RateLimited | ErrorClass::Network => {
                            self.backoff(attempt + 1).await;
                        }
                        ErrorClass::Other => {
                            // Unclassified failures get one short fixed-delay
                            // retry, not the exponential schedule.
                            if other_retry_used {
                                return None;
                            }
                            other_retry_used = true;
                            sleep(OTHER_RETRY_DELAY).await;
                        }
                    }
                }
            }
        }
        None
    }

    async fn backoff(&self, attempt: u32) {
        if attempt >= self.max_retries {
            return;
        }
        let delay = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            backoff_delay(self.base_delay, self.jitter_ceiling, attempt, &mut *rng)
        };
        info!(attempt, delay_secs = delay.as_secs_f64(), "backing off before retry");
        sleep(delay).await;
    }
}

/// Uppercase and validate a ticker symbol. Symbols may carry exchange
/// suffixes ("RELIANCE.NS") or index/class punctuation ("BRK-B", "^GSPC").
fn normalize_ticker(ticker: &str) -> Result<String, FetchError> {
    let trimmed = ticker.trim().to_uppercase();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));
    if valid {
        Ok(trimmed)
    } else {
        Err(FetchError::InvalidTicker(ticker.to_string()))
    }
}
