//! Stockcast API Server
//!
//! HTTP API exposing next-day price predictions with health, status and
//! metrics endpoints. Market data acquisition degrades to synthetic
//! generation when the upstream source is unreachable or rate-limiting.

use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use std::time::Instant;
use stockcast::config::{get_environment, Config};
use stockcast::core::http::{start_server, AppState};
use stockcast::forecast::SmoothingForecaster;
use stockcast::logging;
use stockcast::market::{
    HttpMarketDataSource, MarketDataFetcher, RateLimiter, SyntheticSeriesGenerator,
};
use stockcast::metrics::Metrics;
use stockcast::pipeline::PredictionOrchestrator;
use tokio::signal;
use tokio::sync::Mutex;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = Config::from_env();

    info!("Starting Stockcast API Server");
    info!(environment = %get_environment(), "Environment");
    info!(data_source = %config.data_source_url, "Market data source");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let source = Arc::new(HttpMarketDataSource::new(
        config.data_source_url.clone(),
        config.probe_timeout,
    )?);
    let probe = Arc::new(source.probe().clone());
    let limiter = Arc::new(RateLimiter::new(config.max_calls_per_minute));
    let fetcher = Arc::new(MarketDataFetcher::new(
        source,
        limiter,
        SyntheticSeriesGenerator::new(),
        &config,
    ));
    let forecaster = Arc::new(Mutex::new(SmoothingForecaster::open(&config.model_path)));
    let metrics = Arc::new(Metrics::new()?);
    let orchestrator = Arc::new(PredictionOrchestrator::new(
        fetcher,
        forecaster,
        Some(metrics.clone()),
        &config,
    ));

    let state = AppState {
        orchestrator,
        probe,
        metrics,
        start_time: Arc::new(Instant::now()),
    };

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
