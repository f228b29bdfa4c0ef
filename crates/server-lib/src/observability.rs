//! Observability infrastructure for the prediction service
//!
//! Provides:
//! - Prometheus metrics (prediction latency, outcome counters, model version)
//! - Structured JSON logging with tracing
//!
//! Request logging carries outcome metadata only. Clinical measurements
//! never reach the log stream.

use prometheus::{
    register_gauge_vec, register_histogram, register_int_counter_vec, GaugeVec, Histogram,
    IntCounterVec,
};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ServiceMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct ServiceMetricsInner {
    prediction_latency_seconds: Histogram,
    predictions_total: IntCounterVec,
    prediction_errors_total: IntCounterVec,
    model_version_info: GaugeVec,
}

impl ServiceMetricsInner {
    fn new() -> Self {
        Self {
            prediction_latency_seconds: register_histogram!(
                "liver_predictor_prediction_latency_seconds",
                "Time spent serving a prediction request",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register prediction_latency_seconds"),

            predictions_total: register_int_counter_vec!(
                "liver_predictor_predictions_total",
                "Total number of predictions served, by outcome",
                &["result"]
            )
            .expect("Failed to register predictions_total"),

            prediction_errors_total: register_int_counter_vec!(
                "liver_predictor_prediction_errors_total",
                "Total number of failed prediction requests, by error kind",
                &["kind"]
            )
            .expect("Failed to register prediction_errors_total"),

            model_version_info: register_gauge_vec!(
                "liver_predictor_model_version_info",
                "Information about the currently loaded model",
                &["version"]
            )
            .expect("Failed to register model_version_info"),
        }
    }
}

/// Service metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct ServiceMetrics {
    // This is just a marker - we use the global instance
    _private: (),
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ServiceMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ServiceMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record a prediction latency observation
    pub fn observe_prediction_latency(&self, duration_secs: f64) {
        self.inner()
            .prediction_latency_seconds
            .observe(duration_secs);
    }

    /// Increment the outcome counter for a served prediction
    pub fn inc_prediction(&self, positive: bool) {
        let result = if positive { "positive" } else { "negative" };
        self.inner()
            .predictions_total
            .with_label_values(&[result])
            .inc();
    }

    /// Increment the error counter for a failed request
    pub fn inc_prediction_error(&self, kind: &str) {
        self.inner()
            .prediction_errors_total
            .with_label_values(&[kind])
            .inc();
    }

    /// Update model version info
    pub fn set_model_version(&self, version: &str) {
        self.inner().model_version_info.reset();
        self.inner()
            .model_version_info
            .with_label_values(&[version])
            .set(1.0);
    }
}

/// Structured logger for service events
///
/// Provides consistent JSON-formatted logging for startup, predictions,
/// and rejected requests.
#[derive(Clone)]
pub struct StructuredLogger {
    model_version: String,
}

impl StructuredLogger {
    pub fn new(model_version: impl Into<String>) -> Self {
        Self {
            model_version: model_version.into(),
        }
    }

    /// Log service startup
    pub fn log_startup(&self, version: &str, port: u16) {
        info!(
            event = "service_started",
            service_version = %version,
            model_version = %self.model_version,
            port = port,
            "Prediction service started"
        );
    }

    /// Log a served prediction. Inputs are deliberately absent.
    pub fn log_prediction(&self, result: &str, probability: f64, latency_ms: f64) {
        info!(
            event = "prediction_served",
            model_version = %self.model_version,
            result = %result,
            probability = probability,
            latency_ms = latency_ms,
            "Prediction served"
        );
    }

    /// Log a rejected request. Only the error kind is recorded, since
    /// payload error messages can quote request values.
    pub fn log_rejection(&self, kind: &str) {
        warn!(
            event = "prediction_rejected",
            model_version = %self.model_version,
            kind = %kind,
            "Prediction request rejected"
        );
    }

    /// Log service shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "service_shutdown",
            model_version = %self.model_version,
            reason = %reason,
            "Prediction service shutting down"
        );
    }
}
