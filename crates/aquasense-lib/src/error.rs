//! Error taxonomy for the prediction pipeline
//!
//! Per-request failures (`PredictionError`) are recoverable and surfaced to
//! the viewer as a single human-readable message. Artifact failures
//! (`ArtifactError`) happen at startup and are fatal to the hosting process.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single prediction request
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The requested region was not among the categories the encoder was
    /// fitted on
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    /// The model artifact rejected the feature vector or raised during
    /// computation
    #[error("inference failed: {0}")]
    Inference(#[source] anyhow::Error),
}

/// Failure to load a trained artifact at startup
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model artifact {path:?}")]
    Model {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid encoder artifact {path:?}")]
    Encoder {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoder artifact {path:?} contains no region classes")]
    EmptyEncoder { path: PathBuf },
}
