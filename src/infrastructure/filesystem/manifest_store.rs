use std::path::Path;
use thiserror::Error;
use tokio::fs as async_fs;
use tracing::debug;

/// Manifest store related errors
#[derive(Debug, Error)]
pub enum ManifestStoreError {
    #[error("Manifest file not found at path: {0}")]
    ManifestFileNotFound(String),

    #[error("Manifest file read failed for {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest file is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

impl ManifestStoreError {
    /// Path of the manifest the error refers to
    pub fn path(&self) -> &str {
        match self {
            Self::ManifestFileNotFound(path) | Self::InvalidEncoding(path) => path,
            Self::ReadFailed { path, .. } => path,
        }
    }
}

/// Reads manifest files from disk
#[derive(Debug, Default, Clone)]
pub struct ManifestStore;

impl ManifestStore {
    /// Create a new manifest store
    pub fn new() -> Self {
        Self
    }

    /// Read the raw (untemplated) manifest text
    pub async fn read_manifest_text<P: AsRef<Path>>(
        &self,
        manifest_path: P,
    ) -> Result<String, ManifestStoreError> {
        let manifest_path = manifest_path.as_ref();
        let shown = manifest_path.display().to_string();

        let bytes = async_fs::read(manifest_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestStoreError::ManifestFileNotFound(shown.clone())
            } else {
                ManifestStoreError::ReadFailed {
                    path: shown.clone(),
                    source: e,
                }
            }
        })?;

        debug!(path = %shown, size = bytes.len(), "read manifest file");

        String::from_utf8(bytes).map_err(|_| ManifestStoreError::InvalidEncoding(shown))
    }
}
