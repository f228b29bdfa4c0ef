//! ML prediction pipeline

mod features;
mod inference;
mod output;
mod scaler;

pub use features::{encode_gender, FEATURE_NAMES, NUM_FEATURES};
pub use inference::{InferenceStats, OnnxClassifier};
pub use output::{classify, NEGATIVE_LABEL, POSITIVE_LABEL, PROBABILITY_THRESHOLD};
pub use scaler::{ScalerParams, StandardScaler};

use crate::error::PredictError;
use crate::models::{FeatureVector, PredictRequest, Prediction};
use anyhow::Result;

/// Trait for classifier implementations
pub trait Classifier: Send + Sync {
    /// Disease probability in [0, 1] for a scaled feature vector
    fn predict(&self, features: &[f32; NUM_FEATURES]) -> Result<f32>;

    /// Version of the loaded model
    fn version(&self) -> &str;
}

/// Immutable prediction state shared by all requests.
///
/// Built once at startup from the two artifacts and never mutated; request
/// handlers hold it behind an `Arc` and call [`predict`](Self::predict)
/// concurrently without locks.
pub struct PredictionContext {
    scaler: StandardScaler,
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for PredictionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionContext")
            .field("scaler", &self.scaler)
            .field("model_version", &self.classifier.version())
            .finish()
    }
}

impl PredictionContext {
    pub fn new(scaler: StandardScaler, classifier: Box<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Runs the full pipeline: encode, scale, infer, classify.
    pub fn predict(&self, request: &PredictRequest) -> Result<Prediction, PredictError> {
        let features = FeatureVector::from_request(request);
        let scaled = self.scaler.transform(&features.as_array());
        let probability = self
            .classifier
            .predict(&scaled)
            .map_err(|e| PredictError::inference(e.to_string()))?;
        Ok(classify(probability))
    }

    pub fn model_version(&self) -> &str {
        self.classifier.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    /// Deterministic classifier echoing a fixed probability.
    struct FixedClassifier(f32);

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &[f32; NUM_FEATURES]) -> Result<f32> {
            Ok(self.0)
        }

        fn version(&self) -> &str {
            "fixed"
        }
    }

    /// Classifier that always fails, for error-path coverage.
    struct BrokenClassifier;

    impl Classifier for BrokenClassifier {
        fn predict(&self, _features: &[f32; NUM_FEATURES]) -> Result<f32> {
            bail!("graph execution failed")
        }

        fn version(&self) -> &str {
            "broken"
        }
    }

    fn identity_scaler() -> StandardScaler {
        StandardScaler::from_params(ScalerParams {
            feature_names: Vec::new(),
            mean: vec![0.0; NUM_FEATURES],
            scale: vec![1.0; NUM_FEATURES],
        })
        .unwrap()
    }

    fn sample_request() -> PredictRequest {
        PredictRequest {
            age: 65.0,
            gender: "Female".to_string(),
            total_bilirubin: 0.7,
            direct_bilirubin: 0.1,
            alkphos: 187.0,
            sgpt: 16.0,
            sgot: 18.0,
            total_proteins: 6.8,
            albumin: 3.3,
            ag_ratio: 0.9,
        }
    }

    #[test]
    fn test_pipeline_positive_prediction() {
        let context = PredictionContext::new(identity_scaler(), Box::new(FixedClassifier(0.87)));
        let prediction = context.predict(&sample_request()).unwrap();
        assert_eq!(prediction.result, POSITIVE_LABEL);
        assert_eq!(prediction.probability, 87.0);
    }

    #[test]
    fn test_pipeline_negative_prediction() {
        let context = PredictionContext::new(identity_scaler(), Box::new(FixedClassifier(0.12)));
        let prediction = context.predict(&sample_request()).unwrap();
        assert_eq!(prediction.result, NEGATIVE_LABEL);
        assert_eq!(prediction.probability, 12.0);
    }

    #[test]
    fn test_pipeline_surfaces_inference_failure() {
        let context = PredictionContext::new(identity_scaler(), Box::new(BrokenClassifier));
        let err = context.predict(&sample_request()).unwrap_err();
        assert_eq!(err.kind(), "inference");
        assert!(err.to_string().contains("graph execution failed"));
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let context = PredictionContext::new(identity_scaler(), Box::new(FixedClassifier(0.42)));
        let request = sample_request();
        let first = context.predict(&request).unwrap();
        let second = context.predict(&request).unwrap();
        assert_eq!(first.result, second.result);
        assert_eq!(first.probability, second.probability);
    }
}
