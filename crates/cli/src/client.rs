//! API client for communicating with the prediction service

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

/// API client for the prediction service
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Send a prediction request
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        self.post("predict", request).await
    }

    /// Fetch the service health snapshot
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("healthz").await
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }
}

// API wire types

/// Prediction payload, field names matching the service contract.
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

/// Prediction response. The service always answers 200; a rejected request
/// carries `error` instead of `result`/`probability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_version: String,
    pub feature_count: usize,
    pub started_at: String,
}
