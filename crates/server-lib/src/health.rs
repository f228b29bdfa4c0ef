//! Service health reporting
//!
//! The artifacts are immutable after a fail-fast startup, so health is a
//! snapshot taken when the state is built rather than a live component
//! registry: if the process is serving, it is serving with a complete
//! artifact pair.

use crate::models::{HealthResponse, ReadinessResponse};
use crate::predictor::NUM_FEATURES;
use chrono::{DateTime, Utc};

/// Health state fixed at startup.
#[derive(Debug, Clone)]
pub struct ServiceHealth {
    model_version: String,
    started_at: DateTime<Utc>,
}

impl ServiceHealth {
    pub fn new(model_version: impl Into<String>) -> Self {
        Self {
            model_version: model_version.into(),
            started_at: Utc::now(),
        }
    }

    pub fn snapshot(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            model_version: self.model_version.clone(),
            feature_count: NUM_FEATURES,
            started_at: self.started_at.to_rfc3339(),
        }
    }

    pub fn readiness(&self) -> ReadinessResponse {
        ReadinessResponse { ready: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reports_model_version() {
        let health = ServiceHealth::new("onnx-abc123");
        let snapshot = health.snapshot();
        assert_eq!(snapshot.status, "ok");
        assert_eq!(snapshot.model_version, "onnx-abc123");
        assert_eq!(snapshot.feature_count, NUM_FEATURES);
        assert!(!snapshot.started_at.is_empty());
    }

    #[test]
    fn test_readiness_true_once_built() {
        let health = ServiceHealth::new("onnx-abc123");
        assert!(health.readiness().ready);
    }
}
