//! ONNX inference using tract
//!
//! Executes the converted classifier graph in-process via tract-onnx. The
//! model is parsed, shape-checked, and optimized once at startup; after
//! that every call is a pure function of its input tensor.

use super::features::NUM_FEATURES;
use super::Classifier;
use anyhow::{Context, Result};
use std::time::Instant;
use tract_onnx::prelude::*;
use tracing::{debug, warn};

/// Maximum inference latency before warning (5ms target)
const MAX_INFERENCE_MS: u128 = 5;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-based classifier using tract for lightweight inference
pub struct OnnxClassifier {
    model: TractModel,
    version: String,
    inference_count: std::sync::atomic::AtomicU64,
    slow_inference_count: std::sync::atomic::AtomicU64,
}

impl OnnxClassifier {
    /// Create a classifier from a serialized ONNX graph.
    pub fn from_bytes(model_bytes: &[u8], version: impl Into<String>) -> Result<Self> {
        let model = Self::load_model(model_bytes)?;
        Ok(Self {
            model,
            version: version.into(),
            inference_count: std::sync::atomic::AtomicU64::new(0),
            slow_inference_count: std::sync::atomic::AtomicU64::new(0),
        })
    }

    /// Load and optimize an ONNX model from bytes
    fn load_model(model_bytes: &[u8]) -> Result<TractModel> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(model_bytes))
            .context("Failed to parse ONNX model")?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .context("Failed to set input shape")?
            .into_optimized()
            .context("Failed to optimize model")?
            .into_runnable()
            .context("Failed to create runnable model")?;
        Ok(model)
    }

    /// Convert scaled features to the [1, NUM_FEATURES] input tensor
    fn features_to_tensor(features: &[f32; NUM_FEATURES]) -> Result<Tensor> {
        let array = tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), features.to_vec())
            .context("Failed to shape input tensor")?;
        Ok(array.into())
    }

    /// Extract the scalar probability from the model output
    fn tensor_to_probability(output: &Tensor) -> Result<f32> {
        let output_view = output.to_array_view::<f32>()?;
        let value = output_view
            .iter()
            .copied()
            .next()
            .context("Model returned empty output")?;
        if !value.is_finite() {
            anyhow::bail!("Model returned non-finite probability: {}", value);
        }
        Ok(value)
    }

    /// Get inference statistics
    pub fn stats(&self) -> InferenceStats {
        InferenceStats {
            total_inferences: self
                .inference_count
                .load(std::sync::atomic::Ordering::Relaxed),
            slow_inferences: self
                .slow_inference_count
                .load(std::sync::atomic::Ordering::Relaxed),
        }
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32; NUM_FEATURES]) -> Result<f32> {
        let start = Instant::now();

        let input = Self::features_to_tensor(features)?;
        let result = self.model.run(tvec!(input.into()))?;
        let output = result.first().context("No output from model")?;
        let probability = Self::tensor_to_probability(output)?;

        let elapsed = start.elapsed();
        self.inference_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);

        if elapsed.as_millis() > MAX_INFERENCE_MS {
            self.slow_inference_count
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            warn!(
                elapsed_ms = elapsed.as_millis(),
                "Inference exceeded {}ms target", MAX_INFERENCE_MS
            );
        } else {
            debug!(elapsed_us = elapsed.as_micros(), "Inference completed");
        }

        Ok(probability)
    }

    fn version(&self) -> &str {
        &self.version
    }
}

/// Inference statistics
#[derive(Debug, Clone)]
pub struct InferenceStats {
    pub total_inferences: u64,
    pub slow_inferences: u64,
}
