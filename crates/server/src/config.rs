//! Server configuration

use anyhow::Result;
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server binds on all interfaces
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the serialized classifier artifact
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Path to the scaler parameter export
    #[serde(default = "default_scaler_path")]
    pub scaler_path: String,
}

fn default_port() -> u16 {
    10000
}

fn default_model_path() -> String {
    "artifacts/liver_model.onnx".to_string()
}

fn default_scaler_path() -> String {
    "artifacts/scaler.json".to_string()
}

impl ServerConfig {
    /// Load configuration from the environment (LIVER_PORT, LIVER_MODEL_PATH,
    /// LIVER_SCALER_PATH), falling back to defaults.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("LIVER").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| ServerConfig {
            port: default_port(),
            model_path: default_model_path(),
            scaler_path: default_scaler_path(),
        }))
    }
}
