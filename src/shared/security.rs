use crate::shared::error::OvalError;
use std::fs;
use std::path::Path;

/// Maximum input document size (100 MB)
///
/// Large vendor feeds are a few tens of megabytes; anything bigger is rejected
/// before it is loaded into memory.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an existing path is not a symbolic link
///
/// A path that does not exist yet passes, so this can guard output files
/// before they are created.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<(), OvalError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(OvalError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("Failed to read metadata for {} operation: {}", operation, e),
                hint: "Please verify the path permissions".to_string(),
            })
        }
    };

    if metadata.is_symlink() {
        return Err(OvalError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Use the real file path instead of a link".to_string(),
        });
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Returns the file size so callers can enforce [`MAX_FILE_SIZE`] without a
/// second metadata lookup.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64, OvalError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| OvalError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(OvalError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "For security reasons, symbolic links are not allowed. Pass the real file path"
                .to_string(),
        });
    }

    if !metadata.is_file() {
        return Err(OvalError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        });
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<(), OvalError> {
    if file_size > max_size {
        return Err(OvalError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the OVAL feed or use --limit on a smaller document".to_string(),
        });
    }
    Ok(())
}
