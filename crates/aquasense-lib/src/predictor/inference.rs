//! ONNX inference using tract
//!
//! The regression artifact is exported as ONNX by the training process and
//! loaded once at startup via tract-onnx. The loaded plan is immutable and
//! safe to share read-only across request handlers.

use super::RainfallModel;
use crate::artifact;
use crate::error::ArtifactError;
use crate::models::FeatureVector;
use anyhow::{Context, Result};
use std::path::Path;
use tract_onnx::prelude::*;

type TractPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-based rainfall regressor
#[derive(Debug)]
pub struct OnnxRegressor {
    plan: TractPlan,
}

impl OnnxRegressor {
    /// Load the regression artifact from disk
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = artifact::read(path)?;
        let plan = Self::load_plan(&bytes).map_err(|source| ArtifactError::Model {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { plan })
    }

    /// Parse and optimize an ONNX model from bytes
    fn load_plan(bytes: &[u8]) -> Result<TractPlan> {
        tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(bytes))
            .context("failed to parse ONNX model")?
            .with_input_fact(0, f32::fact([1, FeatureVector::LEN]).into())
            .context("failed to set input shape")?
            .into_optimized()
            .context("failed to optimize model")?
            .into_runnable()
            .context("failed to create runnable model")
    }

    /// Convert a feature vector to the model's `[1, 2]` input tensor
    fn to_tensor(features: &FeatureVector) -> Tensor {
        tract_ndarray::Array2::from_shape_vec(
            (1, FeatureVector::LEN),
            features.as_row().to_vec(),
        )
        .expect("input row has fixed shape")
        .into()
    }
}

impl RainfallModel for OnnxRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let input = Self::to_tensor(features);
        let outputs = self.plan.run(tvec!(input.into()))?;
        let output = outputs.first().context("model produced no output")?;
        let view = output.to_array_view::<f32>()?;
        let value = view.iter().next().context("model output was empty")?;
        Ok(*value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_tensor_shape() {
        let features = FeatureVector {
            encoded_region: 1,
            year: 2023,
        };
        let tensor = OnnxRegressor::to_tensor(&features);
        assert_eq!(tensor.shape(), &[1, FeatureVector::LEN]);
    }

    #[test]
    fn test_corrupt_model_bytes_fail_to_load() {
        assert!(OnnxRegressor::load_plan(b"not an onnx graph").is_err());
    }

    #[test]
    fn test_corrupt_model_artifact_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rainfall.onnx");
        std::fs::write(&path, b"not an onnx graph").unwrap();

        let err = OnnxRegressor::from_path(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Model { .. }));
    }

    #[test]
    fn test_missing_model_artifact_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.onnx");

        let err = OnnxRegressor::from_path(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
    }
}
