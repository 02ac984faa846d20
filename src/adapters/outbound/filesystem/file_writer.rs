use crate::ports::outbound::OutputPresenter;
use crate::shared::error::OvalError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension appended to binary output files
pub const BINARY_EXTENSION: &str = "bin";

/// Returns `path` with a `.bin` suffix, unless it already ends in `.bin`
pub fn with_binary_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == BINARY_EXTENSION) {
        path.to_path_buf()
    } else {
        let mut file_name = path.as_os_str().to_os_string();
        file_name.push(".");
        file_name.push(BINARY_EXTENSION);
        PathBuf::from(file_name)
    }
}

/// FileSystemWriter adapter for writing the binary encoding to a file
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    /// Creates a writer for `output_path`, enforcing the `.bin` suffix
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path: with_binary_extension(&output_path),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(OvalError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &[u8]) -> Result<()> {
        self.validate_parent_directory()?;
        validate_not_symlink(&self.output_path, "write")?;

        fs::write(&self.output_path, content).map_err(|e| OvalError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        log::info!(
            "wrote {} bytes to {}",
            content.len(),
            self.output_path.display()
        );
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content)
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_binary_extension_appended() {
        assert_eq!(
            with_binary_extension(Path::new("out/feed")),
            PathBuf::from("out/feed.bin")
        );
        assert_eq!(
            with_binary_extension(Path::new("feed.pb")),
            PathBuf::from("feed.pb.bin")
        );
    }

    #[test]
    fn test_binary_extension_kept() {
        assert_eq!(
            with_binary_extension(Path::new("out/feed.bin")),
            PathBuf::from("out/feed.bin")
        );
    }

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let requested = temp_dir.path().join("output");

        let writer = FileSystemWriter::new(requested);
        writer.present(&[0x0a, 0x00]).unwrap();

        let written = fs::read(temp_dir.path().join("output.bin")).unwrap();
        assert_eq!(written, vec![0x0a, 0x00]);
        assert_eq!(writer.output_path(), temp_dir.path().join("output.bin"));
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/output.bin"));
        let result = writer.present(b"data");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        assert!(presenter.present(b"{}\n").is_ok());
    }
}
