//! Health CLI command

use anyhow::Result;
use colored::Colorize;

use crate::client::ApiClient;
use crate::output::{color_status, OutputFormat};

/// Show the service health snapshot
pub async fn run(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let health = client.health().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&health)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", "Service Health".bold());
            println!("{}", "=".repeat(50));
            println!("Status:         {}", color_status(&health.status));
            println!("Model Version:  {}", health.model_version.cyan());
            println!("Features:       {}", health.feature_count);
            println!("Started At:     {}", format_timestamp(&health.started_at));
        }
    }

    Ok(())
}

/// Format timestamp for display
fn format_timestamp(ts: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(ts) {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.to_string()
    }
}
