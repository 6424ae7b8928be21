//! The prediction pipeline
//!
//! A pure, single-pass, synchronous transformation: encode the region,
//! assemble the feature vector, run one inference call, scale, classify.
//! Both artifacts are loaded once and held read-only for the process
//! lifetime; the pipeline itself performs no logging, persistence, or
//! caching.

use crate::encoder::RegionEncoder;
use crate::error::{ArtifactError, PredictionError};
use crate::models::{FeatureVector, PredictionRequest, PredictionResult};
use crate::predictor::{classify, OnnxRegressor, RainfallModel};
use std::path::Path;

/// Scale applied to the raw model output to obtain millimeters
///
/// Part of the trained artifact's output convention; changing it breaks
/// compatibility with existing models.
pub const OUTPUT_SCALE_MM: f64 = 10.0;

/// Process-wide prediction pipeline
///
/// Everything is read-only after construction, so one instance is shared
/// across all request handlers without locking.
pub struct PredictionPipeline {
    model: Box<dyn RainfallModel>,
    encoder: RegionEncoder,
}

impl std::fmt::Debug for PredictionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionPipeline")
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl PredictionPipeline {
    /// Assemble a pipeline from already-loaded parts
    pub fn new(model: Box<dyn RainfallModel>, encoder: RegionEncoder) -> Self {
        Self { model, encoder }
    }

    /// Load both artifacts from disk
    ///
    /// Called once at startup; any failure here is fatal to the hosting
    /// process, which must not serve requests with a partially-initialized
    /// pipeline.
    pub fn load(model_path: &Path, encoder_path: &Path) -> Result<Self, ArtifactError> {
        let model = OnnxRegressor::from_path(model_path)?;
        let encoder = RegionEncoder::from_path(encoder_path)?;
        Ok(Self::new(Box::new(model), encoder))
    }

    /// Region names the encoder was fitted on, in encoded order
    pub fn regions(&self) -> &[String] {
        self.encoder.classes()
    }

    /// Turn a request into a classified rainfall estimate
    pub fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let encoded_region = self
            .encoder
            .encode(&request.region)
            .ok_or_else(|| PredictionError::UnknownRegion(request.region.clone()))?;

        let features = FeatureVector {
            encoded_region,
            year: request.year,
        };

        let raw = self
            .model
            .predict(&features)
            .map_err(PredictionError::Inference)?;

        let rainfall_mm = raw * OUTPUT_SCALE_MM;
        Ok(PredictionResult {
            rainfall_mm,
            category: classify(rainfall_mm),
        })
    }
}
