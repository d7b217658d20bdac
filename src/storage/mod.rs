// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes a rendered .docx report and returns its path
    pub fn save_report(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);

        fs::write(&file_path, bytes).map_err(StorageError::IoError)?;

        tracing::info!("Saved report to {}", file_path.display());

        Ok(file_path)
    }

    /// Writes the JSON metadata sidecar next to the report
    pub fn save_report_metadata(
        &self,
        filename: &str,
        metadata: &serde_json::Value,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);

        let metadata_str = serde_json::to_string_pretty(metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
