//! AquaSense prediction library
//!
//! This crate provides the core functionality for:
//! - Trained artifact loading (ONNX regression model, region encoder)
//! - Region label encoding
//! - Rainfall inference and threshold classification
//! - Health checks for the hosting server

pub mod artifact;
pub mod encoder;
pub mod error;
pub mod health;
pub mod models;
pub mod pipeline;
pub mod predictor;

pub use encoder::RegionEncoder;
pub use error::{ArtifactError, PredictionError};
pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use pipeline::{PredictionPipeline, OUTPUT_SCALE_MM};
pub use predictor::{classify, OnnxRegressor, RainfallModel};
