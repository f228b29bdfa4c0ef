//! Liver Disease Predictor CLI
//!
//! A command-line client for sending prediction requests to the service
//! and checking its health.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{health, predict};

/// Liver Disease Predictor CLI
#[derive(Parser)]
#[command(name = "ldp")]
#[command(author, version, about = "CLI for the Liver Disease Predictor", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via LDP_API_URL env var)
    #[arg(long, env = "LDP_API_URL", default_value = "http://localhost:10000")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a prediction request
    Predict {
        /// Read the payload from a JSON file instead of flags
        #[arg(long, short)]
        file: Option<String>,

        #[command(flatten)]
        measurements: MeasurementArgs,
    },

    /// Show service health
    Health,
}

/// Clinical measurements, one flag per payload field.
///
/// All ten are required unless the payload comes from --file.
#[derive(Args)]
pub struct MeasurementArgs {
    /// Patient age in years
    #[arg(long)]
    pub age: Option<f32>,

    /// Patient gender ("Male" or "Female"; the model encoding is
    /// case-sensitive)
    #[arg(long)]
    pub gender: Option<String>,

    /// Total bilirubin
    #[arg(long)]
    pub total_bilirubin: Option<f32>,

    /// Direct bilirubin
    #[arg(long)]
    pub direct_bilirubin: Option<f32>,

    /// Alkaline phosphatase
    #[arg(long)]
    pub alkphos: Option<f32>,

    /// Alamine aminotransferase
    #[arg(long)]
    pub sgpt: Option<f32>,

    /// Aspartate aminotransferase
    #[arg(long)]
    pub sgot: Option<f32>,

    /// Total proteins
    #[arg(long)]
    pub total_proteins: Option<f32>,

    /// Albumin
    #[arg(long)]
    pub albumin: Option<f32>,

    /// Albumin and globulin ratio
    #[arg(long)]
    pub ag_ratio: Option<f32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize client
    let client = client::ApiClient::new(&cli.api_url)?;

    // Execute command
    match cli.command {
        Commands::Predict { file, measurements } => {
            predict::run(&client, file, measurements, cli.format).await?;
        }
        Commands::Health => {
            health::run(&client, cli.format).await?;
        }
    }

    Ok(())
}
