//! Resilient market data acquisition: probe, rate limiting, retry with
//! backoff, and synthetic fallback.

pub mod fetcher;
pub mod probe;
pub mod rate_limiter;
pub mod source;
pub mod synthetic;

pub use fetcher::MarketDataFetcher;
pub use probe::ConnectivityProbe;
pub use rate_limiter::RateLimiter;
pub use source::{HttpMarketDataSource, MarketDataSource};
pub use synthetic::SyntheticSeriesGenerator;
