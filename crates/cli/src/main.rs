//! AquaSense CLI
//!
//! A command-line client for the rainfall prediction service: request
//! predictions, list the selectable options, and check server health.

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{options, predict, status};

mod client;
mod commands;
mod output;

/// AquaSense rainfall prediction CLI
#[derive(Parser)]
#[command(name = "aqs")]
#[command(author, version, about = "CLI for the AquaSense rainfall prediction service", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via AQS_API_URL env var)
    #[arg(long, env = "AQS_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a rainfall prediction
    Predict {
        /// Region name, exactly as the model was trained on it
        #[arg(long, short)]
        region: String,

        /// Year to predict for
        #[arg(long, short)]
        year: i32,
    },

    /// List the selectable regions and years
    Options,

    /// Show server health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize client
    let client = client::ApiClient::new(&cli.api_url)?;

    // Execute command
    match cli.command {
        Commands::Predict { region, year } => {
            predict::run(&client, &region, year, cli.format).await?;
        }
        Commands::Options => {
            options::run(&client, cli.format).await?;
        }
        Commands::Status => {
            status::run(&client, cli.format).await?;
        }
    }

    Ok(())
}
