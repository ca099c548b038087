//! Prometheus metrics for the HTTP surface and the prediction pipeline

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub predictions_total: IntCounter,
    pub predictions_failed_total: IntCounter,
    pub synthetic_fallbacks_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let predictions_total =
            IntCounter::new("predictions_total", "Prediction requests processed")?;
        let predictions_failed_total = IntCounter::new(
            "predictions_failed_total",
            "Prediction requests that resolved with success=false",
        )?;
        let synthetic_fallbacks_total = IntCounter::new(
            "synthetic_fallbacks_total",
            "Predictions served from synthetic data",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(predictions_total.clone()))?;
        registry.register(Box::new(predictions_failed_total.clone()))?;
        registry.register(Box::new(synthetic_fallbacks_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            predictions_total,
            predictions_failed_total,
            synthetic_fallbacks_total,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
