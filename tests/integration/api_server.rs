//! Integration tests for the API server
//!
//! The market data source is a wiremock server whose probe fails, so every
//! prediction resolves from synthetic data without network retries.

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use stockcast::config::Config;
use stockcast::core::http::{create_router, AppState};
use stockcast::forecast::SmoothingForecaster;
use stockcast::market::HttpMarketDataSource;
use stockcast::metrics::Metrics;
use stockcast::pipeline::PredictionOrchestrator;
use tempfile::TempDir;
use tokio::sync::Mutex;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{build_fetcher, test_config};

struct TestApiServer {
    server: TestServer,
    _mock: MockServer,
    _model_dir: TempDir,
}

impl TestApiServer {
    /// Server whose upstream source is unreachable (probe always fails).
    async fn with_unreachable_source() -> Self {
        Self::new(|config| config).await
    }

    async fn new(adjust: impl FnOnce(Config) -> Config) -> Self {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock)
            .await;

        let model_dir = TempDir::new().expect("temp dir");
        let mut config = adjust(test_config(&mock.uri()));
        config.model_path = model_dir.path().join("model.json");

        let source = HttpMarketDataSource::new(config.data_source_url.clone(), config.probe_timeout)
            .expect("http source");
        let probe = Arc::new(source.probe().clone());
        let fetcher = Arc::new(build_fetcher(&config));
        let forecaster = Arc::new(Mutex::new(SmoothingForecaster::open(&config.model_path)));
        let metrics = Arc::new(Metrics::new().expect("metrics"));
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
        let server = TestServer::new(create_router(state)).expect("start test server");

        Self {
            server,
            _mock: mock,
            _model_dir: model_dir,
        }
    }
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::with_unreachable_source().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "stockcast-api");
}

#[tokio::test]
async fn status_endpoint_reports_source_unreachable() {
    let app = TestApiServer::with_unreachable_source().await;
    let response = app.server.get("/status").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["data_source"]["reachable"], false);
    assert_eq!(body["synthetic_available"], true);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::with_unreachable_source().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("predictions_total"));
}

#[tokio::test]
async fn post_predict_returns_a_synthetic_backed_prediction() {
    let app = TestApiServer::with_unreachable_source().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({ "ticker": "AAPL" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["using_synthetic_data"], true);
    assert!(body["current_price"].as_f64().unwrap() > 0.0);
    assert!(body["predicted_price"].as_f64().is_some());
    assert!(body["explanation"]
        .as_str()
        .unwrap()
        .contains("[Note: Using simulated data"));
    assert!(body["prediction_date"].as_str().is_some());
}

#[tokio::test]
async fn get_predict_by_path_segment_works() {
    let app = TestApiServer::with_unreachable_source().await;
    let response = app.server.get("/predict/MSFT").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["ticker"], "MSFT");
}

#[tokio::test]
async fn post_predict_without_ticker_is_rejected() {
    let app = TestApiServer::with_unreachable_source().await;
    let response = app.server.post("/predict").json(&json!({})).await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn post_predict_with_blank_ticker_is_rejected() {
    let app = TestApiServer::with_unreachable_source().await;
    let response = app
        .server
        .post("/predict")
        .json(&json!({ "ticker": "   " }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn insufficient_history_resolves_to_a_structured_failure() {
    // A 30-day window yields ~22 bars, below the 60-bar look-back.
    let app = TestApiServer::new(|mut config| {
        config.days_back = 30;
        config
    })
    .await;

    let response = app.server.get("/predict/AAPL").await;
    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("not enough data"));
}

#[tokio::test]
async fn model_artifact_is_reused_across_requests() {
    let app = TestApiServer::with_unreachable_source().await;

    let first = app.server.get("/predict/GOOGL").await;
    assert_eq!(first.status_code(), 200);
    let second = app.server.get("/predict/TSLA").await;
    assert_eq!(second.status_code(), 200);
}
