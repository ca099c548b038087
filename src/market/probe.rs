//! Best-effort reachability check against the market data source

use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;

/// Cheap connectivity probe, used to short-circuit the expensive fetch path
/// before spending a rate-limit slot.
#[derive(Debug, Clone)]
pub struct ConnectivityProbe {
    client: reqwest::Client,
    base_url: String,
}

impl ConnectivityProbe {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One round trip, no retries. Any error or non-2xx status yields false.
    pub async fn is_reachable(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "connectivity probe failed");
                false
            }
        }
    }
}
