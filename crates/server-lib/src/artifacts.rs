//! Artifact acquisition at startup
//!
//! Reads the classifier and scaler exports from disk, logs their digests,
//! and assembles the immutable prediction context. Every failure here is
//! fatal: the service refuses to start without both artifacts validated.

use crate::error::ArtifactError;
use crate::predictor::{OnnxClassifier, PredictionContext, ScalerParams, StandardScaler};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read an artifact file and log its intake metadata.
///
/// Returns the raw bytes together with the SHA256 digest so callers can
/// derive a content-addressed version without hashing twice.
fn read_artifact(kind: &'static str, path: &Path) -> Result<(Vec<u8>, String), ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        kind,
        path: path.display().to_string(),
        source,
    })?;

    let checksum = compute_checksum(&bytes);
    info!(
        kind,
        path = %path.display(),
        size_bytes = bytes.len(),
        checksum = %checksum,
        "Artifact read"
    );

    Ok((bytes, checksum))
}

/// Load both artifacts and build the prediction context.
pub fn load_context(
    model_path: &Path,
    scaler_path: &Path,
) -> Result<PredictionContext, ArtifactError> {
    let (scaler_bytes, _) = read_artifact("scaler", scaler_path)?;
    let params: ScalerParams =
        serde_json::from_slice(&scaler_bytes).map_err(|e| ArtifactError::Parse {
            kind: "scaler",
            path: scaler_path.display().to_string(),
            message: e.to_string(),
        })?;
    let scaler = StandardScaler::from_params(params).map_err(|e| ArtifactError::Validation {
        kind: "scaler",
        path: scaler_path.display().to_string(),
        message: format!("{:#}", e),
    })?;

    let (model_bytes, model_checksum) = read_artifact("model", model_path)?;
    let model_version = format!("onnx-{}", &model_checksum[..12]);
    let classifier =
        OnnxClassifier::from_bytes(&model_bytes, &model_version).map_err(|e| {
            ArtifactError::Parse {
                kind: "model",
                path: model_path.display().to_string(),
                message: format!("{:#}", e),
            }
        })?;

    info!(model_version = %model_version, "Artifacts loaded");
    Ok(PredictionContext::new(scaler, Box::new(classifier)))
}

/// Compute SHA256 checksum of data
fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::{FEATURE_NAMES, NUM_FEATURES};
    use tempfile::TempDir;

    fn write_scaler(dir: &TempDir, value: &serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join("scaler.json");
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_compute_checksum() {
        let checksum = compute_checksum(b"artifact bytes");
        assert_eq!(checksum.len(), 64); // SHA256 hex is 64 chars
        assert_eq!(checksum, compute_checksum(b"artifact bytes"));
    }

    #[test]
    fn test_missing_scaler_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_context(
            &dir.path().join("model.onnx"),
            &dir.path().join("missing.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ArtifactError::Io { kind: "scaler", .. }));
    }

    #[test]
    fn test_malformed_scaler_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        fs::write(&scaler_path, b"not json").unwrap();
        let err = load_context(&dir.path().join("model.onnx"), &scaler_path).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { kind: "scaler", .. }));
    }

    #[test]
    fn test_short_scaler_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let scaler_path = write_scaler(
            &dir,
            &serde_json::json!({ "mean": [0.0, 0.0], "scale": [1.0, 1.0] }),
        );
        let err = load_context(&dir.path().join("model.onnx"), &scaler_path).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Validation { kind: "scaler", .. }
        ));
    }

    #[test]
    fn test_garbage_model_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let scaler_path = write_scaler(
            &dir,
            &serde_json::json!({
                "feature_names": FEATURE_NAMES,
                "mean": vec![0.0; NUM_FEATURES],
                "scale": vec![1.0; NUM_FEATURES],
            }),
        );
        let model_path = dir.path().join("model.onnx");
        fs::write(&model_path, b"not an onnx graph").unwrap();
        let err = load_context(&model_path, &scaler_path).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { kind: "model", .. }));
    }

    #[test]
    fn test_missing_model_is_io_error() {
        let dir = TempDir::new().unwrap();
        let scaler_path = write_scaler(
            &dir,
            &serde_json::json!({
                "mean": vec![0.0; NUM_FEATURES],
                "scale": vec![1.0; NUM_FEATURES],
            }),
        );
        let err = load_context(&dir.path().join("model.onnx"), &scaler_path).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { kind: "model", .. }));
    }
}
