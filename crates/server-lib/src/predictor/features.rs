//! Feature encoding for model inference
//!
//! Turns a decoded request payload into the fixed-order numeric vector the
//! scaler and classifier were trained on. The column order defined here is
//! the single source of truth for the whole pipeline.

use crate::models::{FeatureVector, PredictRequest};

/// Number of model input features
pub const NUM_FEATURES: usize = 10;

/// Canonical column order of the training data
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "Age",
    "Gender",
    "Total_Bilirubin",
    "Direct_Bilirubin",
    "Alkphos",
    "Sgpt",
    "Sgot",
    "Total_Proteins",
    "Albumin",
    "AG_Ratio",
];

/// Encodes the gender string exactly as the training pipeline did.
///
/// Only the literal `"Male"` maps to 1.0; every other value, including
/// `"male"`, maps to 0.0. The fitted artifacts depend on this mapping, so
/// it is pinned by tests rather than loosened.
pub fn encode_gender(gender: &str) -> f32 {
    if gender == "Male" {
        1.0
    } else {
        0.0
    }
}

impl FeatureVector {
    /// Encodes a request into the canonical feature layout.
    pub fn from_request(request: &PredictRequest) -> Self {
        Self {
            age: request.age,
            gender: encode_gender(&request.gender),
            total_bilirubin: request.total_bilirubin,
            direct_bilirubin: request.direct_bilirubin,
            alkphos: request.alkphos,
            sgpt: request.sgpt,
            sgot: request.sgot,
            total_proteins: request.total_proteins,
            albumin: request.albumin,
            ag_ratio: request.ag_ratio,
        }
    }

    /// Features in training column order, ready for the scaler.
    pub fn as_array(&self) -> [f32; NUM_FEATURES] {
        [
            self.age,
            self.gender,
            self.total_bilirubin,
            self.direct_bilirubin,
            self.alkphos,
            self.sgpt,
            self.sgot,
            self.total_proteins,
            self.albumin,
            self.ag_ratio,
        ]
    }
}
