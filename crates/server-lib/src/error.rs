//! Error types for artifact loading and request handling

use thiserror::Error;

/// Startup failure while acquiring the model or scaler artifacts.
///
/// These are fatal: the service refuses to start without both artifacts
/// parsed and validated.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read {kind} artifact at {path}: {source}")]
    Io {
        kind: &'static str,
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {kind} artifact at {path}: {message}")]
    Parse {
        kind: &'static str,
        path: String,
        message: String,
    },

    #[error("invalid {kind} artifact at {path}: {message}")]
    Validation {
        kind: &'static str,
        path: String,
        message: String,
    },
}

/// Failure while serving a single prediction request.
///
/// Every variant renders as an `{"error": ...}` body; nothing in this
/// taxonomy escapes the request boundary as a panic.
#[derive(Error, Debug)]
pub enum PredictError {
    /// The payload could not be decoded into the ten expected fields.
    #[error("{0}")]
    Payload(String),

    /// The scaler or classifier failed on otherwise valid input.
    #[error("inference failed: {0}")]
    Inference(String),
}

impl PredictError {
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Stable low-cardinality tag used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Payload(_) => "payload",
            Self::Inference(_) => "inference",
        }
    }
}
