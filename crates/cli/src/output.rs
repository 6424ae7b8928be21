//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a rainfall estimate in millimeters
pub fn format_rainfall(rainfall_mm: f64) -> String {
    format!("{:.2} mm", rainfall_mm)
}

/// Color a rainfall category
pub fn color_category(category: &str) -> String {
    match category {
        "Drought" => category.yellow().to_string(),
        "Flood" => category.red().to_string(),
        "Normal" => category.green().to_string(),
        _ => category.to_string(),
    }
}

/// Color a health status
pub fn color_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "healthy" => status.green().to_string(),
        "degraded" => status.yellow().to_string(),
        "unhealthy" => status.red().to_string(),
        _ => status.to_string(),
    }
}
