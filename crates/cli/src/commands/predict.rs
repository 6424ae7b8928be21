//! Prediction command

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, PredictRequest, PredictResponse};
use crate::output::{color_category, format_rainfall, print_info, OutputFormat};

/// Row for the prediction table
#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Rainfall")]
    rainfall: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Request a prediction and print the result
pub async fn run(client: &ApiClient, region: &str, year: i32, format: OutputFormat) -> Result<()> {
    let request = PredictRequest {
        region: region.to_string(),
        year,
    };
    let response: PredictResponse = client.post("api/predict", &request).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Table => {
            let rows = vec![PredictionRow {
                region: response.region.clone(),
                year: response.year,
                rainfall: format_rainfall(response.rainfall_mm),
                category: color_category(&response.category),
            }];

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            print_info(&response.summary);
        }
    }

    Ok(())
}
