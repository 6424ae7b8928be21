//! Options listing command

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, OptionsResponse};
use crate::output::{print_info, OutputFormat};

/// Row for the regions table
#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Code")]
    code: usize,
    #[tabled(rename = "Region")]
    region: String,
}

/// List the selectable regions and years
pub async fn run(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let options: OptionsResponse = client.get("api/options").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        OutputFormat::Table => {
            // The row index is the integer the encoder assigns to the region
            let rows: Vec<RegionRow> = options
                .regions
                .iter()
                .enumerate()
                .map(|(code, region)| RegionRow {
                    code,
                    region: region.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);

            let years: Vec<String> = options.years.iter().map(|y| y.to_string()).collect();
            print_info(&format!("Years: {}", years.join(", ")));
        }
    }

    Ok(())
}
