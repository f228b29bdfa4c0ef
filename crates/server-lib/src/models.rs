//! Core data models for the prediction service

use serde::{Deserialize, Serialize};

/// Incoming prediction payload: ten clinical measurements.
///
/// Field names match the wire contract used by the front-end, so every
/// field carries an explicit rename. `Gender` arrives as a string; the
/// remaining nine values are numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Age")]
    pub age: f32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Total_Bilirubin")]
    pub total_bilirubin: f32,
    #[serde(rename = "Direct_Bilirubin")]
    pub direct_bilirubin: f32,
    #[serde(rename = "Alkphos")]
    pub alkphos: f32,
    #[serde(rename = "Sgpt")]
    pub sgpt: f32,
    #[serde(rename = "Sgot")]
    pub sgot: f32,
    #[serde(rename = "Total_Proteins")]
    pub total_proteins: f32,
    #[serde(rename = "Albumin")]
    pub albumin: f32,
    #[serde(rename = "AG_Ratio")]
    pub ag_ratio: f32,
}

/// Ordered numeric encoding of a request, ready for scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f32,
    pub gender: f32,
    pub total_bilirubin: f32,
    pub direct_bilirubin: f32,
    pub alkphos: f32,
    pub sgpt: f32,
    pub sgot: f32,
    pub total_proteins: f32,
    pub albumin: f32,
    pub ag_ratio: f32,
}

/// Successful prediction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub result: String,
    /// Disease probability as a percentage, rounded to two decimals.
    pub probability: f64,
}

/// Error payload returned to callers in place of a prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Snapshot served by `/healthz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_version: String,
    pub feature_count: usize,
    pub started_at: String,
}

/// Response served by `/readyz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
}
