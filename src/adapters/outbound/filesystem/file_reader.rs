use crate::ports::outbound::OvalDocumentReader;
use crate::shared::error::OvalError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading OVAL documents from disk
///
/// This adapter implements the OvalDocumentReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> std::result::Result<String, OvalError> {
        if !path.exists() {
            return Err(OvalError::FileReadError {
                path: path.to_path_buf(),
                details: "OVAL document does not exist".to_string(),
            });
        }

        let file_size = validate_regular_file(path, "OVAL document")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| OvalError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }
}

impl OvalDocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        Ok(self.safe_read_file(path)?)
    }
}
