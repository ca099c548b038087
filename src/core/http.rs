//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::market::ConnectivityProbe;
use crate::metrics::Metrics;
use crate::models::PredictionResult;
use crate::pipeline::PredictionOrchestrator;

pub const SERVICE_NAME: &str = "stockcast-api";

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PredictionOrchestrator>,
    pub probe: Arc<ConnectivityProbe>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    }))
}

/// Live reachability report for the upstream market data source.
pub async fn status_check(State(state): State<AppState>) -> Json<Value> {
    let reachable = state.probe.is_reachable().await;
    Json(json!({
        "data_source": {
            "reachable": reachable,
            "base_url": state.probe.base_url(),
        },
        "synthetic_available": true,
        "service": SERVICE_NAME
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct PredictRequest {
    ticker: Option<String>,
}

fn result_response(result: PredictionResult) -> (StatusCode, Json<Value>) {
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(json!(result)))
}

/// Predict the next-day price for the ticker in the POST body.
async fn predict_post(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> (StatusCode, Json<Value>) {
    let ticker = request.ticker.unwrap_or_default();
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Missing 'ticker' in request body"
            })),
        );
    }

    let result = state.orchestrator.predict(ticker).await;
    result_response(result)
}

/// Predict the next-day price for the ticker in the path.
async fn predict_get(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> (StatusCode, Json<Value>) {
    let result = state.orchestrator.predict(&ticker).await;
    result_response(result)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/status", get(status_check))
        .route("/metrics", get(metrics_handler))
        .route("/predict", post(predict_post))
        .route("/predict/{ticker}", get(predict_get))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
