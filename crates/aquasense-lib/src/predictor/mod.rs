//! Rainfall prediction engine

mod classify;
mod inference;

pub use classify::{classify, DROUGHT_THRESHOLD_MM, FLOOD_THRESHOLD_MM};
pub use inference::OnnxRegressor;

use crate::models::FeatureVector;
use anyhow::Result;

/// Trait for regression model implementations
///
/// Production code wraps the ONNX artifact; tests substitute fixed-output
/// fakes so classification can be exercised without a trained model.
pub trait RainfallModel: Send + Sync {
    /// Produce the raw (unscaled) rainfall estimate for a feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}
