//! Server configuration

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, read from `AQUASENSE_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP port for the dashboard and API
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the serialized regression model (ONNX)
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Path to the serialized region encoder (JSON)
    #[serde(default = "default_encoder_path")]
    pub encoder_path: PathBuf,

    /// Years offered as selectable choices on the dashboard
    #[serde(default = "default_years")]
    pub years: Vec<i32>,
}

fn default_port() -> u16 {
    8080
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/rainfall.onnx")
}

fn default_encoder_path() -> PathBuf {
    PathBuf::from("models/region_encoder.json")
}

fn default_years() -> Vec<i32> {
    vec![2023, 2024]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            model_path: default_model_path(),
            encoder_path: default_encoder_path(),
            years: default_years(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("AQUASENSE")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("years"),
            )
            .build()?;

        Ok(config.try_deserialize().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, PathBuf::from("models/rainfall.onnx"));
        assert_eq!(
            config.encoder_path,
            PathBuf::from("models/region_encoder.json")
        );
        assert_eq!(config.years, vec![2023, 2024]);
    }
}
