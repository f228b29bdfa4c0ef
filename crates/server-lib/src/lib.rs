//! Library for the liver disease prediction service
//!
//! This crate provides the core functionality for:
//! - Startup artifact loading and validation
//! - Feature encoding, scaling, and ONNX inference
//! - Health snapshots and observability

pub mod artifacts;
pub mod error;
pub mod health;
pub mod models;
pub mod observability;
pub mod predictor;

pub use artifacts::load_context;
pub use error::{ArtifactError, PredictError};
pub use health::ServiceHealth;
pub use models::*;
pub use observability::{ServiceMetrics, StructuredLogger};
pub use predictor::{Classifier, PredictionContext};
