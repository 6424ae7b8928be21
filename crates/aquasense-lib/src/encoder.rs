//! Region label encoding
//!
//! The encoder artifact is exported by the training process as a JSON
//! document listing the region classes in encoded order. Encoding is an
//! exact-match lookup: no case-folding, no trimming. `"goa"` or `"Goa "`
//! are unknown labels, matching what the model was trained against.

use crate::artifact;
use crate::error::ArtifactError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// On-disk layout of the encoder artifact
#[derive(Debug, Deserialize)]
struct EncoderArtifact {
    classes: Vec<String>,
}

/// Immutable mapping from region names to the integers the model was
/// trained on
#[derive(Debug, Clone)]
pub struct RegionEncoder {
    classes: Vec<String>,
    index: HashMap<String, u32>,
}

impl RegionEncoder {
    /// Build an encoder from region classes in encoded order
    pub fn new(classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.clone(), i as u32))
            .collect();
        Self { classes, index }
    }

    /// Load the encoder artifact from disk
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = artifact::read(path)?;
        let parsed: EncoderArtifact =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Encoder {
                path: path.to_path_buf(),
                source,
            })?;

        if parsed.classes.is_empty() {
            return Err(ArtifactError::EmptyEncoder {
                path: path.to_path_buf(),
            });
        }

        Ok(Self::new(parsed.classes))
    }

    /// Encode a region name, or `None` if the label was not seen at fit time
    pub fn encode(&self, region: &str) -> Option<u32> {
        self.index.get(region).copied()
    }

    /// Region names in encoded order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
