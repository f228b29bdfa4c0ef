//! HTTP API: prediction endpoint, health checks, Prometheus metrics

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use server_lib::{
    predictor::POSITIVE_LABEL, ErrorBody, PredictError, PredictRequest, Prediction,
    PredictionContext, ServiceHealth, ServiceMetrics, StructuredLogger,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<PredictionContext>,
    pub health: ServiceHealth,
    pub metrics: ServiceMetrics,
    pub logger: StructuredLogger,
}

impl AppState {
    pub fn new(context: Arc<PredictionContext>, metrics: ServiceMetrics) -> Self {
        let health = ServiceHealth::new(context.model_version());
        let logger = StructuredLogger::new(context.model_version());
        Self {
            context,
            health,
            metrics,
            logger,
        }
    }
}

/// Record a failed request and build its error body.
fn reject(state: &AppState, err: PredictError) -> Json<ErrorBody> {
    state.metrics.inc_prediction_error(err.kind());
    state.logger.log_rejection(err.kind());
    Json(ErrorBody::new(err.to_string()))
}

/// Prediction endpoint.
///
/// Always answers 200: success bodies carry `result` and `probability`,
/// failures carry `error`. Existing callers branch on the presence of the
/// `error` field, so the status code stays uniform.
async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Prediction>, Json<ErrorBody>> {
    let start = Instant::now();

    let Json(request) = payload
        .map_err(|rejection| reject(&state, PredictError::payload(rejection.body_text())))?;

    let prediction = state
        .context
        .predict(&request)
        .map_err(|err| reject(&state, err))?;

    let latency_secs = start.elapsed().as_secs_f64();
    state.metrics.observe_prediction_latency(latency_secs);
    state
        .metrics
        .inc_prediction(prediction.result == POSITIVE_LABEL);
    state.logger.log_prediction(
        &prediction.result,
        prediction.probability,
        latency_secs * 1000.0,
    );

    Ok(Json(prediction))
}

/// Health check response
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.health.snapshot()))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health.readiness();

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
///
/// The prediction endpoint is called from a separate front-end origin, so
/// every route carries a permissive CORS layer.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .layer(cors)
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
