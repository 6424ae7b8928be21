//! Trained artifact loading
//!
//! Both artifacts are opaque outputs of an external training process. They
//! are read from local disk exactly once, at startup; the size and SHA256
//! checksum of each file are logged so a deployment can be audited against
//! the training run that produced it.

use crate::error::ArtifactError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read an artifact file, logging its size and checksum
pub fn read(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        size = bytes.len(),
        checksum = %checksum(&bytes),
        "Loaded artifact"
    );

    Ok(bytes)
}

/// Compute SHA256 checksum of artifact bytes
pub fn checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_checksum_format() {
        let checksum = checksum(b"trained artifact bytes");
        assert_eq!(checksum.len(), 64); // SHA256 hex is 64 chars
    }

    #[test]
    fn test_checksum_consistency() {
        let data = b"trained artifact bytes";
        assert_eq!(checksum(data), checksum(data));
    }

    #[test]
    fn test_read_returns_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.onnx");
        fs::write(&path, b"weights").unwrap();

        let bytes = read(&path).unwrap();
        assert_eq!(bytes, b"weights");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.onnx");

        let err = read(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
    }
}
