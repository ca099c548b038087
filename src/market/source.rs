//! Market data source interface and its HTTP implementation

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::FetchError;
use crate::market::probe::ConnectivityProbe;
use crate::models::PriceBar;

/// Upstream source of daily price history.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Best-effort reachability check; must not retry.
    async fn is_reachable(&self) -> bool;

    /// Daily bars for `ticker` covering the last `days_back` calendar days.
    async fn daily_history(&self, ticker: &str, days_back: u32)
        -> Result<Vec<PriceBar>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct DailyHistoryResponse {
    bars: Vec<PriceBar>,
}

/// HTTP data source speaking a plain JSON daily-history endpoint:
/// `GET {base_url}/daily/{ticker}?days={n}` returning `{"bars": [...]}`.
pub struct HttpMarketDataSource {
    client: reqwest::Client,
    base_url: String,
    probe: ConnectivityProbe,
}

impl HttpMarketDataSource {
    pub fn new(
        base_url: impl Into<String>,
        probe_timeout: Duration,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let probe = ConnectivityProbe::new(base_url.clone(), probe_timeout)?;
        Ok(Self {
            client,
            base_url,
            probe,
        })
    }

    pub fn probe(&self) -> &ConnectivityProbe {
        &self.probe
    }
}

#[async_trait]
impl MarketDataSource for HttpMarketDataSource {
    async fn is_reachable(&self) -> bool {
        self.probe.is_reachable().await
    }

    async fn daily_history(
        &self,
        ticker: &str,
        days_back: u32,
    ) -> Result<Vec<PriceBar>, FetchError> {
        let url = format!("{}/daily/{}", self.base_url, ticker);
        let response = self
            .client
            .get(&url)
            .query(&[("days", days_back)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: DailyHistoryResponse = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(body.bars)
    }
}
