//! Standardization transform loaded from the training export
//!
//! The training pipeline fits a per-feature standardization and exports the
//! parameters as a JSON artifact. The export is parsed and validated once at
//! startup; after that the transform is pure arithmetic,
//! `(x - mean) / scale` per feature.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::features::{FEATURE_NAMES, NUM_FEATURES};

/// On-disk shape of the scaler export.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerParams {
    /// Column names recorded by the fit, when the exporter includes them.
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

/// Validated per-feature standardization, immutable after load.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: [f32; NUM_FEATURES],
    scale: [f32; NUM_FEATURES],
}

impl StandardScaler {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let params: ScalerParams =
            serde_json::from_slice(bytes).context("scaler export is not valid JSON")?;
        Self::from_params(params)
    }

    pub fn from_params(params: ScalerParams) -> Result<Self> {
        if params.mean.len() != NUM_FEATURES {
            bail!(
                "scaler export has {} means, expected {}",
                params.mean.len(),
                NUM_FEATURES
            );
        }
        if params.scale.len() != NUM_FEATURES {
            bail!(
                "scaler export has {} scales, expected {}",
                params.scale.len(),
                NUM_FEATURES
            );
        }
        if !params.feature_names.is_empty() && params.feature_names != FEATURE_NAMES {
            bail!(
                "scaler export column order {:?} does not match expected {:?}",
                params.feature_names,
                FEATURE_NAMES
            );
        }

        let mut mean = [0.0f32; NUM_FEATURES];
        let mut scale = [0.0f32; NUM_FEATURES];
        for i in 0..NUM_FEATURES {
            let (m, s) = (params.mean[i], params.scale[i]);
            if !m.is_finite() || !s.is_finite() {
                bail!("scaler parameter for {} is not finite", FEATURE_NAMES[i]);
            }
            if s == 0.0 {
                bail!("scaler scale for {} is zero", FEATURE_NAMES[i]);
            }
            mean[i] = m;
            scale[i] = s;
        }

        Ok(Self { mean, scale })
    }

    /// Applies `(x - mean) / scale` to each feature.
    pub fn transform(&self, features: &[f32; NUM_FEATURES]) -> [f32; NUM_FEATURES] {
        let mut scaled = [0.0f32; NUM_FEATURES];
        for i in 0..NUM_FEATURES {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}
