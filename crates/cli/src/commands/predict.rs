//! Prediction CLI command

use anyhow::{Context, Result};
use tabled::Tabled;

use crate::client::{ApiClient, PredictRequest};
use crate::output::{color_result, format_probability, OutputFormat};
use crate::MeasurementArgs;

/// Row for the prediction table
#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Probability")]
    probability: String,
}

/// Send a prediction request and render the outcome
pub async fn run(
    client: &ApiClient,
    file: Option<String>,
    measurements: MeasurementArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = match file {
        Some(path) => read_payload(&path)?,
        None => build_request(measurements)?,
    };

    let response = client.predict(&request).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if let Some(error) = &response.error {
                anyhow::bail!("prediction rejected: {}", error);
            }

            let result = response
                .result
                .context("response is missing the prediction label")?;
            let probability = response
                .probability
                .context("response is missing the probability")?;

            let rows = vec![PredictionRow {
                result: color_result(&result),
                probability: format_probability(probability),
            }];

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// Read a prediction payload from a JSON file
fn read_payload(path: &str) -> Result<PredictRequest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file {}", path))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse payload file {}", path))
}

/// Assemble a payload from individual flags
fn build_request(measurements: MeasurementArgs) -> Result<PredictRequest> {
    Ok(PredictRequest {
        age: require(measurements.age, "--age")?,
        gender: require(measurements.gender, "--gender")?,
        total_bilirubin: require(measurements.total_bilirubin, "--total-bilirubin")?,
        direct_bilirubin: require(measurements.direct_bilirubin, "--direct-bilirubin")?,
        alkphos: require(measurements.alkphos, "--alkphos")?,
        sgpt: require(measurements.sgpt, "--sgpt")?,
        sgot: require(measurements.sgot, "--sgot")?,
        total_proteins: require(measurements.total_proteins, "--total-proteins")?,
        albumin: require(measurements.albumin, "--albumin")?,
        ag_ratio: require(measurements.ag_ratio, "--ag-ratio")?,
    })
}

/// Reject a missing flag before anything goes over the wire
fn require<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.with_context(|| format!("{} is required when --file is not used", flag))
}
