use crate::adapters::outbound::filesystem::{
    with_binary_extension, FileSystemWriter, StdoutPresenter,
};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where one encoded output ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    /// JSON projection on stdout
    Stdout,
    /// Wire-format file; `.bin` is appended to the path when missing
    BinaryFile(PathBuf),
}

impl PresenterType {
    /// Human-readable destination, with the `.bin` suffix already applied
    pub fn destination(&self) -> String {
        match self {
            PresenterType::Stdout => "stdout".to_string(),
            PresenterType::BinaryFile(path) => with_binary_extension(path).display().to_string(),
        }
    }
}

/// Factory for the presenter behind each output destination
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter for `presenter_type`
    ///
    /// # Examples
    /// ```
    /// use oval_proto::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        log::debug!("Output destination: {}", presenter_type.destination());

        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::BinaryFile(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_binary_file_presenter_writes_bin_path() {
        let dir = TempDir::new().unwrap();
        let presenter =
            PresenterFactory::create(PresenterType::BinaryFile(dir.path().join("feed")));

        presenter.present(&[0x0a, 0x02, 0x08, 0x01]).unwrap();

        assert_eq!(
            fs::read(dir.path().join("feed.bin")).unwrap(),
            vec![0x0a, 0x02, 0x08, 0x01]
        );
        assert!(!dir.path().join("feed").exists());
    }

    #[test]
    fn test_binary_file_presenter_missing_directory() {
        let dir = TempDir::new().unwrap();
        let presenter = PresenterFactory::create(PresenterType::BinaryFile(
            dir.path().join("missing").join("feed"),
        ));

        let err = presenter.present(b"bytes").unwrap_err();
        assert!(err.to_string().contains("Failed to write to file"));
    }

    #[test]
    fn test_destination() {
        assert_eq!(PresenterType::Stdout.destination(), "stdout");
        assert_eq!(
            PresenterType::BinaryFile(PathBuf::from("out/rhel-9")).destination(),
            "out/rhel-9.bin"
        );
        assert_eq!(
            PresenterType::BinaryFile(PathBuf::from("rhel-9.bin")).destination(),
            "rhel-9.bin"
        );
    }
}
