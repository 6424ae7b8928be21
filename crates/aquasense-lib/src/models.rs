//! Core data models for the prediction service

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single prediction request, supplied per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub region: String,
    pub year: i32,
}

/// Classified rainfall estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Rainfall estimate in millimeters
    pub rainfall_mm: f64,
    pub category: RainfallCategory,
}

/// Rainfall situation derived from the estimate via two fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainfallCategory {
    Drought,
    Flood,
    Normal,
}

impl RainfallCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RainfallCategory::Drought => "Drought",
            RainfallCategory::Flood => "Flood",
            RainfallCategory::Normal => "Normal",
        }
    }
}

impl fmt::Display for RainfallCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature vector for model inference
///
/// The model was trained on positional columns and has no awareness of
/// feature names; the column order here is part of the artifact contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub encoded_region: u32,
    pub year: i32,
}

impl FeatureVector {
    /// Number of input columns expected by the model
    pub const LEN: usize = 2;

    /// Row layout fed to the model: `[encoded_region, year]`
    pub fn as_row(&self) -> [f32; Self::LEN] {
        [self.encoded_region as f32, self.year as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_row_order_is_region_then_year() {
        let features = FeatureVector {
            encoded_region: 3,
            year: 2024,
        };
        assert_eq!(features.as_row(), [3.0, 2024.0]);
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_value(RainfallCategory::Drought).unwrap();
        assert_eq!(json, "Drought");
        assert_eq!(RainfallCategory::Flood.to_string(), "Flood");
    }
}
